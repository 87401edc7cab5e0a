use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::implementations::config::OracleConfig;
use crate::models::rate::RateQuote;
use crate::traits::rate_source::{RateError, RateSource};

/// Wire format of the oracle response: a single envelope object whose keys
/// are numbered display strings, with the rate itself carried as a decimal
/// string. Only the rate is required to be present and every field decodes
/// as text, never as a JSON number.
#[derive(Debug, Deserialize)]
struct RateEnvelope {
    #[serde(rename = "Realtime Currency Exchange Rate")]
    payload: RatePayload,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RatePayload {
    #[serde(rename = "1. From_Currency Code")]
    pub(crate) from_currency_code: Option<String>,

    #[serde(rename = "2. From_Currency Name")]
    pub(crate) from_currency_name: Option<String>,

    #[serde(rename = "3. To_Currency Code")]
    pub(crate) to_currency_code: Option<String>,

    #[serde(rename = "4. To_Currency Name")]
    pub(crate) to_currency_name: Option<String>,

    #[serde(rename = "5. Exchange Rate")]
    pub(crate) exchange_rate: String,

    #[serde(rename = "6. Last Refreshed")]
    pub(crate) last_refreshed: Option<String>,

    #[serde(rename = "7. Time Zone")]
    pub(crate) time_zone: Option<String>,

    #[serde(rename = "8. Bid Price")]
    pub(crate) bid_price: Option<String>,

    #[serde(rename = "9. Ask Price")]
    pub(crate) ask_price: Option<String>,
}

/// Decode the oracle envelope and parse out the rate. Kept free of any I/O
/// so malformed payloads can be exercised directly.
pub(crate) fn parse_envelope(body: &str) -> Result<(f64, RatePayload), RateError> {
    let envelope: RateEnvelope = serde_json::from_str(body).map_err(|e| {
        warn!("Oracle envelope parsing error: {}", e);
        RateError::Envelope(e.to_string())
    })?;

    let payload = envelope.payload;
    let rate = payload.exchange_rate.trim().parse::<f64>().map_err(|_| {
        warn!("Oracle rate field {:?} is not a number", payload.exchange_rate);
        RateError::Rate(payload.exchange_rate.clone())
    })?;

    Ok((rate, payload))
}

/// Exchange-rate client for an Alpha Vantage style currency endpoint.
///
/// Stateless between calls: every quote is one HTTPS request with the
/// configured timeout, and nothing is cached or retried here. Callers that
/// want retries decide using [`RateError::is_retryable`].
pub struct AlphaVantageClient {
    config: OracleConfig,
    http_client: reqwest::Client,
}

impl AlphaVantageClient {
    /// Create a client from oracle settings. The API credential is resolved
    /// per quote, so a missing key only fails the operations that need one.
    pub fn new(config: OracleConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }
}

#[async_trait]
impl RateSource for AlphaVantageClient {
    async fn quote(&self) -> Result<RateQuote, RateError> {
        let api_key = self
            .config
            .get_api_key()
            .map_err(|e| RateError::Credential(e.to_string()))?;

        let from = self.config.from_currency();
        let to = self.config.to_currency();
        debug!(
            "Requesting {}/{} exchange rate from {}",
            from,
            to,
            self.config.endpoint()
        );

        let response = self
            .http_client
            .get(self.config.endpoint())
            .query(&[
                ("function", "CURRENCY_EXCHANGE_RATE"),
                ("from_currency", from),
                ("to_currency", to),
                ("apikey", api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                let error_msg = format!("Network error when calling the rate oracle: {}", e);
                warn!("{}", error_msg);
                if e.is_timeout() {
                    return RateError::Timeout(self.config.timeout_secs());
                }
                if e.is_connect() {
                    warn!("Connection error - check network connectivity");
                }
                RateError::Transport(error_msg)
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error message".to_string());

            warn!("Oracle error: HTTP {} - {}", status, error_text);
            return Err(RateError::Status(status));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| RateError::Transport(format!("Failed to read oracle response: {}", e)))?;
        debug!("Oracle response length: {} characters", response_text.len());

        let (rate, payload) = parse_envelope(&response_text)?;
        debug!(
            "Oracle quote details: names {:?}/{:?}, refreshed {:?} ({:?}), bid {:?}, ask {:?}",
            payload.from_currency_name,
            payload.to_currency_name,
            payload.last_refreshed,
            payload.time_zone,
            payload.bid_price,
            payload.ask_price
        );

        let quote = RateQuote {
            rate,
            from_currency: payload.from_currency_code.unwrap_or_else(|| from.to_string()),
            to_currency: payload.to_currency_code.unwrap_or_else(|| to.to_string()),
            fetched_at: Utc::now(),
            last_refreshed: payload.last_refreshed,
        };
        info!(
            "Exchange rate {}/{} is {}",
            quote.from_currency, quote.to_currency, quote.rate
        );

        Ok(quote)
    }
}

/// Rate source answering with a fixed constant. Used by tests and by
/// offline runs where no oracle is reachable.
pub struct FixedRateSource {
    rate: f64,
}

impl FixedRateSource {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

#[async_trait]
impl RateSource for FixedRateSource {
    async fn quote(&self) -> Result<RateQuote, RateError> {
        Ok(RateQuote {
            rate: self.rate,
            from_currency: "BTC".to_string(),
            to_currency: "USD".to_string(),
            fetched_at: Utc::now(),
            last_refreshed: None,
        })
    }
}
