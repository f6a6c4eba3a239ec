//! # Rate Lookup
//!
//! The external collaborator contract for exchange rates, plus the
//! exchangerate-api.com client that implements it. The state machine only
//! sees the [`RateProvider`] trait; everything that can go wrong on the
//! wire is folded into [`RateError`] and treated uniformly as "conversion
//! unavailable" by the caller.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::conversation::ConversionRequest;

/// Bound on a single rate lookup; expiry is reported as a lookup failure.
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";

/// Failure modes of a rate lookup.
#[derive(Debug, Clone)]
pub enum RateError {
    /// Transport-level failure (connection, TLS, non-JSON body transport).
    Http(String),
    /// The request exceeded [`LOOKUP_TIMEOUT`].
    Timeout(String),
    /// The provider answered with something that does not deserialize.
    MalformedResponse(String),
    /// The provider answered but reported a non-success result.
    ApiFailure(String),
    /// The provider had no rate for the requested target currency.
    UnknownCurrency(String),
}

impl std::fmt::Display for RateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateError::Http(msg) => write!(f, "HTTP error: {msg}"),
            RateError::Timeout(msg) => write!(f, "Timeout error: {msg}"),
            RateError::MalformedResponse(msg) => write!(f, "Malformed response: {msg}"),
            RateError::ApiFailure(msg) => write!(f, "Provider failure: {msg}"),
            RateError::UnknownCurrency(code) => write!(f, "No rate for currency: {code}"),
        }
    }
}

impl std::error::Error for RateError {}

/// A source of exchange rates: given a source currency code, the full map
/// of target code to rate, or a failure.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn lookup(&self, from: &str) -> Result<HashMap<String, f64>, RateError>;
}

/// Resolve a fully collected conversion request against a provider.
///
/// One lookup, no retries: any failure surfaces immediately and the
/// attempt is abandoned.
pub async fn convert(
    provider: &dyn RateProvider,
    request: &ConversionRequest,
) -> Result<f64, RateError> {
    let rates = provider.lookup(&request.from).await?;
    let rate = rates
        .get(&request.to)
        .ok_or_else(|| RateError::UnknownCurrency(request.to.clone()))?;
    Ok(request.amount * rate)
}

/// Response shape of `GET /v6/{key}/latest/{FROM}`.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    result: String,
    #[serde(default)]
    conversion_rates: HashMap<String, f64>,
}

/// Live client for exchangerate-api.com.
pub struct ExchangeRateApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ExchangeRateApi {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different endpoint (used by tests).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApi {
    async fn lookup(&self, from: &str) -> Result<HashMap<String, f64>, RateError> {
        let url = format!("{}/{}/latest/{}", self.base_url, self.api_key, from);

        let response = self
            .client
            .get(&url)
            .timeout(LOOKUP_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RateError::Timeout(e.to_string())
                } else {
                    // The error text may embed the URL, which contains the
                    // API key; keep only the error kind.
                    RateError::Http(e.without_url().to_string())
                }
            })?;

        let body: LatestRatesResponse = response
            .json()
            .await
            .map_err(|e| RateError::MalformedResponse(e.without_url().to_string()))?;

        if body.result != "success" {
            return Err(RateError::ApiFailure(body.result));
        }

        Ok(body.conversion_rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRates(HashMap<String, f64>);

    #[async_trait]
    impl RateProvider for FixedRates {
        async fn lookup(&self, _from: &str) -> Result<HashMap<String, f64>, RateError> {
            Ok(self.0.clone())
        }
    }

    struct AlwaysFailing;

    #[async_trait]
    impl RateProvider for AlwaysFailing {
        async fn lookup(&self, _from: &str) -> Result<HashMap<String, f64>, RateError> {
            Err(RateError::Http("connection refused".to_string()))
        }
    }

    fn request(from: &str, to: &str, amount: f64) -> ConversionRequest {
        ConversionRequest {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        }
    }

    #[tokio::test]
    async fn test_convert_multiplies_by_rate() {
        let provider = FixedRates(HashMap::from([("RUB".to_string(), 90.5)]));
        let converted = convert(&provider, &request("USD", "RUB", 100.0)).await;
        assert_eq!(converted.unwrap(), 9050.0);
    }

    #[tokio::test]
    async fn test_convert_missing_target_is_unknown_currency() {
        let provider = FixedRates(HashMap::from([("RUB".to_string(), 90.5)]));
        let err = convert(&provider, &request("USD", "XYZ", 100.0))
            .await
            .unwrap_err();
        assert!(matches!(err, RateError::UnknownCurrency(code) if code == "XYZ"));
    }

    #[tokio::test]
    async fn test_convert_propagates_lookup_failure() {
        let err = convert(&AlwaysFailing, &request("USD", "RUB", 100.0))
            .await
            .unwrap_err();
        assert!(matches!(err, RateError::Http(_)));
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{"result":"success","conversion_rates":{"RUB":90.5,"KZT":478.2}}"#;
        let parsed: LatestRatesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.result, "success");
        assert_eq!(parsed.conversion_rates.get("KZT"), Some(&478.2));
    }

    #[test]
    fn test_error_result_without_rates_still_deserializes() {
        let body = r#"{"result":"error","error-type":"invalid-key"}"#;
        let parsed: LatestRatesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.result, "error");
        assert!(parsed.conversion_rates.is_empty());
    }
}
