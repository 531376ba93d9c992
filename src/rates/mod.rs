//! Currency conversion backed by a persisted exchange-rate table
//!
//! Rates are USD-relative and cached on disk as a whole-document JSON
//! object. A present cache is never considered stale; fetching happens only
//! when no cache exists or when a refresh is requested explicitly.

pub mod client;
pub mod store;

pub use client::RatesClient;
pub use store::RateStore;

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, info};

use crate::convert::round_to;
use crate::units::Outcome;

/// Currency code mapped to its USD-relative exchange rate
pub type RateTable = BTreeMap<String, f64>;

/// Decimal places applied to currency results
const CURRENCY_PRECISION: i32 = 2;

/// Errors that can occur while loading, fetching, or persisting rates
#[derive(Debug, Error)]
pub enum RatesError {
    /// Fetching rates from the remote source failed
    #[error("failed to fetch exchange rates: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading or writing the rate cache file failed
    #[error("failed to access rate cache: {0}")]
    Io(#[from] std::io::Error),

    /// The rate cache file exists but is not a valid code-to-rate object
    #[error("rate cache is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Converts currency amounts, fetching and caching rates as needed
#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    /// Persisted rate table
    store: RateStore,
    /// Client for the remote rate source
    client: RatesClient,
}

impl CurrencyConverter {
    /// Creates a converter over the given store with a default client.
    pub fn new(store: RateStore) -> Self {
        Self {
            store,
            client: RatesClient::new(),
        }
    }

    /// Creates a converter with a custom client.
    #[allow(dead_code)]
    pub fn with_client(store: RateStore, client: RatesClient) -> Self {
        Self { store, client }
    }

    /// Converts an amount between two currency codes.
    ///
    /// Loads the persisted rate table, fetching and persisting a fresh one
    /// first if no cache exists. Returns `Outcome::Unavailable` when either
    /// code is missing from the table; network and persistence failures
    /// propagate as `RatesError` so callers can distinguish "pair not
    /// supported" from "rates could not be obtained".
    pub async fn convert(
        &self,
        amount: f64,
        from_code: &str,
        to_code: &str,
    ) -> Result<Outcome, RatesError> {
        let rates = match self.store.load()? {
            Some(rates) => rates,
            None => {
                debug!("no cached rates, fetching from remote source");
                self.refresh().await?
            }
        };
        Ok(convert_with_table(&rates, amount, from_code, to_code))
    }

    /// Fetches fresh rates and overwrites the cache wholesale.
    ///
    /// This is the only refresh path; a present cache is otherwise served
    /// as-is regardless of age.
    pub async fn refresh(&self) -> Result<RateTable, RatesError> {
        let rates = self.client.fetch_rates().await?;
        self.store.save(&rates)?;
        info!(count = rates.len(), "exchange rates refreshed");
        Ok(rates)
    }
}

/// Converts an amount using an already-loaded rate table.
///
/// Both codes must be present; the result is rounded to 2 decimal places.
pub fn convert_with_table(rates: &RateTable, amount: f64, from_code: &str, to_code: &str) -> Outcome {
    match (rates.get(from_code), rates.get(to_code)) {
        (Some(from_rate), Some(to_rate)) => {
            Outcome::Value(round_to(amount * to_rate / from_rate, CURRENCY_PRECISION))
        }
        _ => Outcome::Unavailable(format!(
            "conversion not available for {} to {}",
            from_code, to_code
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_table() -> RateTable {
        RateTable::from([
            ("USD".to_string(), 1.0),
            ("EUR".to_string(), 0.9),
            ("GBP".to_string(), 0.78),
            ("INR".to_string(), 83.2),
        ])
    }

    #[test]
    fn test_usd_to_eur() {
        let result = convert_with_table(&sample_table(), 100.0, "USD", "EUR");
        assert_eq!(result, Outcome::Value(90.0));
    }

    #[test]
    fn test_eur_to_usd_inverts_the_rate() {
        // 90 * 1.0 / 0.9 = 100
        let result = convert_with_table(&sample_table(), 90.0, "EUR", "USD");
        assert_eq!(result, Outcome::Value(100.0));
    }

    #[test]
    fn test_cross_rate_goes_through_usd() {
        // 10 EUR -> INR: 10 * 83.2 / 0.9 = 924.444..., rounded to 2 places
        let result = convert_with_table(&sample_table(), 10.0, "EUR", "INR");
        assert_eq!(result, Outcome::Value(924.44));
    }

    #[test]
    fn test_result_is_rounded_to_two_places() {
        // 1 * 0.78 / 0.9 = 0.8666...
        let result = convert_with_table(&sample_table(), 1.0, "EUR", "GBP");
        assert_eq!(result, Outcome::Value(0.87));
    }

    #[test]
    fn test_unknown_source_code_is_unavailable() {
        match convert_with_table(&sample_table(), 100.0, "XYZ", "EUR") {
            Outcome::Unavailable(reason) => {
                assert!(reason.contains("XYZ"));
                assert!(reason.contains("EUR"));
            }
            Outcome::Value(v) => panic!("expected unavailable, got {}", v),
        }
    }

    #[test]
    fn test_unknown_target_code_is_unavailable() {
        let result = convert_with_table(&sample_table(), 100.0, "USD", "XYZ");
        assert!(!result.is_value());
    }

    #[tokio::test]
    async fn test_convert_uses_cached_table_without_fetching() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = RateStore::with_dir(temp_dir.path().to_path_buf());
        store.save(&sample_table()).expect("Save should succeed");

        // A populated cache short-circuits the fetch, so this works offline.
        let converter = CurrencyConverter::new(store);
        let result = converter.convert(100.0, "USD", "EUR").await.unwrap();
        assert_eq!(result, Outcome::Value(90.0));
    }

    #[tokio::test]
    async fn test_convert_with_cached_table_reports_missing_code() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = RateStore::with_dir(temp_dir.path().to_path_buf());
        store.save(&sample_table()).expect("Save should succeed");

        let converter = CurrencyConverter::new(store);
        let result = converter.convert(100.0, "XYZ", "EUR").await.unwrap();
        assert!(!result.is_value());
    }
}
