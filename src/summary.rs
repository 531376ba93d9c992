//! Per-category conversion counts derived from the history.

use crate::units::{Category, ConversionRecord};

/// Counts conversions per category.
///
/// Each record is attributed to the first category (in catalog order) whose
/// unit list contains its `from_unit`; unit symbols are unique across
/// categories, so the first match is the only match. Records whose source
/// unit belongs to no category are excluded. The result is in catalog order
/// with zero-count categories omitted.
pub fn summarize(history: &[ConversionRecord]) -> Vec<(Category, usize)> {
    let categories = Category::all();
    let mut counts = vec![0usize; categories.len()];

    for record in history {
        if let Some(index) = categories
            .iter()
            .position(|category| category.contains_unit(&record.from_unit))
        {
            counts[index] += 1;
        }
    }

    categories
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(category, count)| (*category, count))
        .collect()
}
