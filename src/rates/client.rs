//! Exchange-rate API client
//!
//! Fetches the latest USD-based exchange rates from the remote rate source.
//! Only the `rates` field of the response document is consumed.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use super::{RateTable, RatesError};

/// URL of the exchange-rate endpoint, base currency USD
const EXCHANGE_RATE_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

/// Upper bound on the whole fetch, connection included
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Response from the exchange-rate API
///
/// The document also carries provider metadata and a date stamp; only the
/// code-to-rate mapping is of interest here.
#[derive(Debug, Deserialize)]
struct ExchangeRateResponse {
    rates: RateTable,
}

/// Client for fetching exchange rates from the remote rate source
#[derive(Debug, Clone)]
pub struct RatesClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Endpoint URL (allows override for testing)
    base_url: String,
}

impl RatesClient {
    /// Creates a new RatesClient with default configuration.
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            base_url: EXCHANGE_RATE_URL.to_string(),
        }
    }

    /// Creates a new RatesClient with a custom endpoint URL.
    #[allow(dead_code)]
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
        }
    }

    /// Fetches the full USD-relative rate table.
    ///
    /// The request is bounded by a timeout so an unreachable rate source
    /// surfaces as `RatesError::Http` instead of hanging the caller.
    pub async fn fetch_rates(&self) -> Result<RateTable, RatesError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;

        let body: ExchangeRateResponse = response.json().await?;
        Ok(body.rates)
    }
}

impl Default for RatesClient {
    fn default() -> Self {
        Self::new()
    }
}
