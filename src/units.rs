//! Conversion categories, the unit catalog, and history record types.
//!
//! This module defines the core data types used throughout the application:
//! the `Category` enum with its static unit catalog, the tagged `Outcome` of
//! a conversion, and the `ConversionRecord` persisted to the history file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversion categories supported by the application.
///
/// Each category owns a fixed, ordered list of unit symbols; a unit symbol
/// is valid only within its owning category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Speed,
    Currency,
}

impl Category {
    /// Returns a slice containing all categories in their canonical order.
    ///
    /// This order is load-bearing: summary attribution scans categories in
    /// this sequence and assigns each record to the first match.
    pub fn all() -> &'static [Category] {
        &[
            Category::Length,
            Category::Weight,
            Category::Temperature,
            Category::Speed,
            Category::Currency,
        ]
    }

    /// Returns a human-readable display label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Speed => "Speed",
            Category::Currency => "Currency",
        }
    }

    /// Returns the ordered list of unit symbols belonging to this category.
    pub fn units(&self) -> &'static [&'static str] {
        match self {
            Category::Length => &["Meter", "Kilometer", "Centimeter", "Mile"],
            Category::Weight => &["Kilogram", "Gram", "Pound", "Ounce"],
            Category::Temperature => &["Celsius", "Fahrenheit"],
            Category::Speed => &["m/s", "km/h", "mph"],
            Category::Currency => &["USD", "EUR", "GBP", "INR", "PKR"],
        }
    }

    /// Returns true if the given unit symbol belongs to this category.
    pub fn contains_unit(&self, unit: &str) -> bool {
        self.units().contains(&unit)
    }

    /// Parses user input into a Category.
    ///
    /// Matching is case-insensitive and supports aliases:
    /// - "length" -> Length
    /// - "weight" | "mass" -> Weight
    /// - "temperature" | "temp" -> Temperature
    /// - "speed" -> Speed
    /// - "currency" -> Currency
    ///
    /// Returns `None` if the input doesn't match any category, so an
    /// unrecognized category degrades to "no units" rather than failing.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Category> {
        match s.to_lowercase().trim() {
            "length" => Some(Category::Length),
            "weight" | "mass" => Some(Category::Weight),
            "temperature" | "temp" => Some(Category::Temperature),
            "speed" => Some(Category::Speed),
            "currency" => Some(Category::Currency),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The tagged result of a conversion attempt.
///
/// Serialized untagged so the history file keeps its original wire shape:
/// a number on success, a reason string when the conversion was unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    /// The converted numeric result
    Value(f64),
    /// The conversion could not be performed; carries a user-visible reason
    Unavailable(String),
}

impl Outcome {
    /// Returns true if this outcome carries a numeric result.
    pub fn is_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(v) => write!(f, "{}", v),
            Outcome::Unavailable(reason) => f.write_str(reason),
        }
    }
}

/// A single conversion attempt, as persisted in the history file.
///
/// The on-disk representation is a 4-element JSON array
/// `[value, fromUnit, toUnit, result]`, kept for compatibility with
/// existing history files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecordTuple", into = "RecordTuple")]
pub struct ConversionRecord {
    /// The input value
    pub value: f64,
    /// Source unit symbol
    pub from_unit: String,
    /// Target unit symbol
    pub to_unit: String,
    /// Result of the conversion attempt
    pub outcome: Outcome,
}

/// Wire shape of a history record
type RecordTuple = (f64, String, String, Outcome);

impl From<RecordTuple> for ConversionRecord {
    fn from((value, from_unit, to_unit, outcome): RecordTuple) -> Self {
        Self {
            value,
            from_unit,
            to_unit,
            outcome,
        }
    }
}

impl From<ConversionRecord> for RecordTuple {
    fn from(record: ConversionRecord) -> Self {
        (
            record.value,
            record.from_unit,
            record.to_unit,
            record.outcome,
        )
    }
}

impl ConversionRecord {
    /// Creates a record from a conversion attempt.
    pub fn new(value: f64, from_unit: &str, to_unit: &str, outcome: Outcome) -> Self {
        Self {
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            outcome,
        }
    }
}

/// Returns a short informational blurb for well-known units.
///
/// Only a handful of units carry one; callers should render a default
/// line for the rest.
pub fn unit_info(unit: &str) -> Option<&'static str> {
    match unit {
        "Meter" => Some("Basic unit of length in the metric system."),
        "Kilogram" => Some("Standard unit of mass in the metric system."),
        "Celsius" => Some("Temperature scale used worldwide."),
        "USD" => Some("United States Dollar, the global reserve currency."),
        _ => None,
    }
}
