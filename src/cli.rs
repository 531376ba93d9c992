//! Command-line interface definitions for unitconv
//!
//! This module defines the clap command tree plus the parse helpers that
//! turn raw string arguments into library types, reporting the valid
//! choices when an argument doesn't match.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::units::Category;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified category name is not recognized
    #[error("Invalid category: '{0}'. Valid categories: length, weight, temperature, speed, currency")]
    InvalidCategory(String),

    /// The specified output format is not recognized
    #[error("Invalid format: '{0}'. Valid formats: table, csv, json")]
    InvalidFormat(String),
}

/// unitconv - convert values across length, weight, temperature, speed, and currency
#[derive(Parser, Debug)]
#[command(name = "unitconv")]
#[command(about = "Unit and currency conversion with persistent history")]
#[command(version)]
pub struct Cli {
    /// Directory for the history and rate-cache files
    ///
    /// Defaults to the platform data directory
    /// (e.g. ~/.local/share/unitconv on Linux).
    #[arg(long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert one or more values between two units of a category
    ///
    /// Examples:
    ///   unitconv convert length Meter Kilometer 1500
    ///   unitconv convert temperature Celsius Fahrenheit 0 37 100
    ///   unitconv convert currency USD EUR 25 --reverse
    Convert {
        /// Conversion category: length, weight, temperature, speed, currency
        category: String,
        /// Source unit symbol (e.g. Meter, Celsius, USD)
        from: String,
        /// Target unit symbol
        to: String,
        /// Values to convert (one result per value)
        #[arg(required = true)]
        values: Vec<f64>,
        /// Swap source and target units before converting
        #[arg(long)]
        reverse: bool,
    },

    /// List the supported units for one or all categories
    Units {
        /// Category to list; omit to list every category
        category: Option<String>,
    },

    /// Show background information about a unit
    Info {
        /// Unit symbol
        unit: String,
    },

    /// Show or clear the conversion history
    History {
        #[command(subcommand)]
        action: Option<HistoryCommand>,
    },

    /// Show per-category conversion counts
    Summary,

    /// Manage the cached currency exchange rates
    Rates {
        #[command(subcommand)]
        action: RatesCommand,
    },
}

/// History subcommands
#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// Print the conversion history (the default action)
    Show {
        /// Output format: table, csv, or json
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Delete all history records
    Clear,
}

/// Rate-cache subcommands
#[derive(Subcommand, Debug)]
pub enum RatesCommand {
    /// Fetch fresh rates and overwrite the cache
    Refresh,
    /// Print the cached rate table
    Show,
}

/// Output formats for `history show`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Table,
    Csv,
    Json,
}

impl ExportFormat {
    /// Parses user input into an ExportFormat, case-insensitively.
    ///
    /// Returns `None` if the input doesn't match any format.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<ExportFormat> {
        match s.to_lowercase().trim() {
            "table" => Some(ExportFormat::Table),
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

/// Parses a category string argument into a Category.
///
/// # Returns
/// * `Ok(Category)` if the string matches a valid category
/// * `Err(CliError::InvalidCategory)` if it doesn't
pub fn parse_category_arg(s: &str) -> Result<Category, CliError> {
    Category::from_str(s).ok_or_else(|| CliError::InvalidCategory(s.to_string()))
}

/// Parses a format string argument into an ExportFormat.
///
/// # Returns
/// * `Ok(ExportFormat)` if the string matches a valid format
/// * `Err(CliError::InvalidFormat)` if it doesn't
pub fn parse_format_arg(s: &str) -> Result<ExportFormat, CliError> {
    ExportFormat::from_str(s).ok_or_else(|| CliError::InvalidFormat(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_arg_valid() {
        assert_eq!(parse_category_arg("length").unwrap(), Category::Length);
        assert_eq!(parse_category_arg("Currency").unwrap(), Category::Currency);
        assert_eq!(parse_category_arg("temp").unwrap(), Category::Temperature);
    }

    #[test]
    fn test_parse_category_arg_invalid() {
        let result = parse_category_arg("volume");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid category"));
        assert!(err.to_string().contains("volume"));
    }

    #[test]
    fn test_parse_format_arg_valid() {
        assert_eq!(parse_format_arg("table").unwrap(), ExportFormat::Table);
        assert_eq!(parse_format_arg("CSV").unwrap(), ExportFormat::Csv);
        assert_eq!(parse_format_arg("json").unwrap(), ExportFormat::Json);
    }

    #[test]
    fn test_parse_format_arg_invalid() {
        let result = parse_format_arg("xml");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("xml"));
    }

    #[test]
    fn test_cli_parse_convert_with_values() {
        let cli = Cli::parse_from([
            "unitconv", "convert", "length", "Meter", "Kilometer", "1", "2.5",
        ]);
        match cli.command {
            Command::Convert {
                category,
                from,
                to,
                values,
                reverse,
            } => {
                assert_eq!(category, "length");
                assert_eq!(from, "Meter");
                assert_eq!(to, "Kilometer");
                assert_eq!(values, vec![1.0, 2.5]);
                assert!(!reverse);
            }
            other => panic!("expected Convert, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_convert_reverse_flag() {
        let cli = Cli::parse_from([
            "unitconv", "convert", "length", "Meter", "Kilometer", "1", "--reverse",
        ]);
        match cli.command {
            Command::Convert { reverse, .. } => assert!(reverse),
            other => panic!("expected Convert, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_convert_requires_a_value() {
        let result = Cli::try_parse_from(["unitconv", "convert", "length", "Meter", "Kilometer"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_negative_values() {
        let cli = Cli::parse_from([
            "unitconv",
            "convert",
            "temperature",
            "Celsius",
            "Fahrenheit",
            "--",
            "-40",
        ]);
        match cli.command {
            Command::Convert { values, .. } => assert_eq!(values, vec![-40.0]),
            other => panic!("expected Convert, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_history_defaults_to_show() {
        let cli = Cli::parse_from(["unitconv", "history"]);
        match cli.command {
            Command::History { action } => assert!(action.is_none()),
            other => panic!("expected History, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_history_show_with_format() {
        let cli = Cli::parse_from(["unitconv", "history", "show", "--format", "csv"]);
        match cli.command {
            Command::History {
                action: Some(HistoryCommand::Show { format }),
            } => assert_eq!(format, "csv"),
            other => panic!("expected History show, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_rates_refresh() {
        let cli = Cli::parse_from(["unitconv", "rates", "refresh"]);
        match cli.command {
            Command::Rates { action } => assert!(matches!(action, RatesCommand::Refresh)),
            other => panic!("expected Rates, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_global_data_dir() {
        let cli = Cli::parse_from(["unitconv", "summary", "--data-dir", "/tmp/unitconv-test"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/unitconv-test")));
    }
}
