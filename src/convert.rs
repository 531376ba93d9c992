//! Pure conversion engine for the linear and temperature categories.
//!
//! Linear categories (Length, Weight, Speed) convert through a per-unit
//! multiplier relative to an implicit base unit; Temperature uses the affine
//! Celsius/Fahrenheit formulas. Currency is handled by the `rates` module
//! because it needs the persisted exchange-rate table.

use crate::units::{Category, Outcome};

/// Decimal places applied to linear category results
const LINEAR_PRECISION: i32 = 4;

/// Decimal places applied to temperature results
const TEMPERATURE_PRECISION: i32 = 2;

/// Returns the base-unit multiplier for a unit within a linear category.
///
/// The multiplier expresses "1 unit = multiplier base-units" with Meter,
/// Kilogram, and m/s as the implicit bases. Returns `None` for units the
/// category doesn't know and for non-linear categories.
fn linear_factor(category: Category, unit: &str) -> Option<f64> {
    match category {
        Category::Length => match unit {
            "Meter" => Some(1.0),
            "Kilometer" => Some(1000.0),
            "Centimeter" => Some(0.01),
            "Mile" => Some(1609.34),
            _ => None,
        },
        Category::Weight => match unit {
            "Kilogram" => Some(1.0),
            "Gram" => Some(0.001),
            "Pound" => Some(0.453592),
            "Ounce" => Some(0.0283495),
            _ => None,
        },
        Category::Speed => match unit {
            "m/s" => Some(1.0),
            "km/h" => Some(3.6),
            "mph" => Some(2.237),
            _ => None,
        },
        Category::Temperature | Category::Currency => None,
    }
}

/// Converts a value between two units of the given category.
///
/// Pure function: no side effects, no I/O. Every failure mode is reported
/// as `Outcome::Unavailable` with a user-visible reason rather than a panic:
/// - a unit missing from a linear category's factor table,
/// - a temperature pairing other than Celsius<->Fahrenheit
///   (same-unit temperature included),
/// - the Currency category, which callers must route through
///   `rates::CurrencyConverter` instead.
///
/// Linear results are rounded to 4 decimal places, temperature results to 2.
pub fn convert(category: Category, from_unit: &str, to_unit: &str, value: f64) -> Outcome {
    match category {
        Category::Length | Category::Weight | Category::Speed => {
            let from = match linear_factor(category, from_unit) {
                Some(factor) => factor,
                None => return unknown_unit(category, from_unit),
            };
            let to = match linear_factor(category, to_unit) {
                Some(factor) => factor,
                None => return unknown_unit(category, to_unit),
            };
            Outcome::Value(round_to(value * from / to, LINEAR_PRECISION))
        }
        Category::Temperature => match (from_unit, to_unit) {
            ("Celsius", "Fahrenheit") => {
                Outcome::Value(round_to(value * 9.0 / 5.0 + 32.0, TEMPERATURE_PRECISION))
            }
            ("Fahrenheit", "Celsius") => {
                Outcome::Value(round_to((value - 32.0) * 5.0 / 9.0, TEMPERATURE_PRECISION))
            }
            _ => Outcome::Unavailable(format!(
                "temperature conversion from {} to {} is not supported",
                from_unit, to_unit
            )),
        },
        Category::Currency => Outcome::Unavailable(
            "currency conversions require the exchange-rate table".to_string(),
        ),
    }
}

fn unknown_unit(category: Category, unit: &str) -> Outcome {
    Outcome::Unavailable(format!("unknown {} unit '{}'", category, unit))
}

/// Rounds a value to the given number of decimal places, half away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
