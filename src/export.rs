//! Derived renderings of the conversion history.
//!
//! Pure views over loaded records: CSV with a fixed header row, and the
//! pretty-printed form of the history's own JSON wire shape.

use thiserror::Error;

use crate::units::ConversionRecord;

/// Errors that can occur while rendering an export
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV writing failed
    #[error("failed to render CSV: {0}")]
    Csv(#[from] csv::Error),

    /// CSV output was not valid UTF-8
    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// JSON serialization failed
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders the history as CSV with columns `Value,From,To,Result`.
pub fn to_csv(history: &[ConversionRecord]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Value", "From", "To", "Result"])?;
    for record in history {
        writer.write_record([
            record.value.to_string(),
            record.from_unit.clone(),
            record.to_unit.clone(),
            record.outcome.to_string(),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|e| ExportError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Renders the history as pretty-printed JSON in its wire shape.
pub fn to_json_pretty(history: &[ConversionRecord]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(history)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Outcome;

    fn sample_history() -> Vec<ConversionRecord> {
        vec![
            ConversionRecord::new(1.0, "Kilometer", "Meter", Outcome::Value(1000.0)),
            ConversionRecord::new(
                100.0,
                "XYZ",
                "EUR",
                Outcome::Unavailable("conversion not available for XYZ to EUR".to_string()),
            ),
        ]
    }

    #[test]
    fn test_csv_header_and_rows() {
        let csv = to_csv(&sample_history()).expect("CSV rendering should succeed");
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Value,From,To,Result");
        assert_eq!(lines[1], "1,Kilometer,Meter,1000");
        assert_eq!(lines[2], "100,XYZ,EUR,conversion not available for XYZ to EUR");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_of_empty_history_is_just_the_header() {
        let csv = to_csv(&[]).expect("CSV rendering should succeed");
        assert_eq!(csv, "Value,From,To,Result\n");
    }

    #[test]
    fn test_csv_quotes_fields_containing_commas() {
        let history = [ConversionRecord::new(
            1.0,
            "USD",
            "EUR",
            Outcome::Unavailable("unavailable, try refreshing".to_string()),
        )];
        let csv = to_csv(&history).expect("CSV rendering should succeed");
        assert!(csv.contains("\"unavailable, try refreshing\""));
    }

    #[test]
    fn test_json_pretty_roundtrips_the_wire_shape() {
        let history = sample_history();
        let json = to_json_pretty(&history).expect("JSON rendering should succeed");

        // Pretty output parses back to the same records
        let parsed: Vec<ConversionRecord> =
            serde_json::from_str(&json).expect("Pretty JSON should parse");
        assert_eq!(parsed, history);

        // And it is indented, not the compact storage form
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_json_of_empty_history_is_an_empty_array() {
        let json = to_json_pretty(&[]).expect("JSON rendering should succeed");
        assert_eq!(json, "[]");
    }
}
