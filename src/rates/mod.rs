//! Exchange-rate lookup against an external rate service.
//!
//! One request per lookup, no retry and no caching: a failure is terminal for
//! that call and the caller decides whether to try again.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::round_to_cents;

/// Default rate service endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.exchangerate-api.com/v4";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Response from `GET {endpoint}/latest/{base}`.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    /// Multipliers keyed by target currency code
    rates: HashMap<String, f64>,
}

#[derive(Error, Debug)]
pub enum RateError {
    /// Service reachable, but the target code is absent from its rate table.
    #[error("Currency not supported by rate service: {0}")]
    UnsupportedCurrency(String),

    /// Transport failure or non-success HTTP status.
    #[error("Rate service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Response body not parseable into the expected shape, or a rate value
    /// that is not a positive finite number.
    #[error("Malformed rate response: {0}")]
    MalformedResponse(String),
}

/// Client for the external exchange-rate service.
pub struct RateClient {
    client: Client,
    endpoint: String,
}

impl RateClient {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a client against a non-default endpoint (e.g. a test server).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Fetch the rate multiplier from `base` to `target`.
    /// Issues a single request; the ledger is never touched on any path.
    pub async fn get_rate(&self, base: &str, target: &str) -> Result<f64, RateError> {
        let url = format!("{}/latest/{}", self.endpoint, base);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RateError::ServiceUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("rate service returned {} for {}", status, base);
            return Err(RateError::ServiceUnavailable(format!(
                "rate service returned {}",
                status
            )));
        }

        let body: LatestRatesResponse = response
            .json()
            .await
            .map_err(|e| RateError::MalformedResponse(e.to_string()))?;

        rate_for(&body.rates, target)
    }
}

impl Default for RateClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up `target` in a rate table and validate the multiplier.
fn rate_for(rates: &HashMap<String, f64>, target: &str) -> Result<f64, RateError> {
    let rate = rates
        .get(target)
        .copied()
        .ok_or_else(|| RateError::UnsupportedCurrency(target.to_string()))?;

    if !rate.is_finite() || rate <= 0.0 {
        return Err(RateError::MalformedResponse(format!(
            "invalid rate for {}: {}",
            target, rate
        )));
    }

    Ok(rate)
}

/// Convert an amount with an already-fetched rate, rounded to two decimal
/// places for display.
pub fn convert_at_rate(amount: f64, rate: f64) -> f64 {
    round_to_cents(amount * rate)
}
