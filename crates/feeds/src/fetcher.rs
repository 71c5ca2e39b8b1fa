//! Feed fetcher trait and the reqwest-backed implementation.
//!
//! All outbound HTTP performed by the gateway goes through [`FeedFetcher`].
//! Services depend on the trait so tests can substitute a stub that never
//! touches the network.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::errors::FeedError;
use crate::models::{BullionSnapshot, PairConversion, RateRecord};

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Base URL of the ExchangeRate-API pair endpoint
const EXCHANGE_RATE_API_BASE: &str = "https://v6.exchangerate-api.com/v6";

/// Outbound feed access.
///
/// One fetch call is one attempt: implementations must not retry, so that
/// every failure mode surfaces to the caller exactly once and is
/// distinguishable via [`FeedError`].
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Fetch the full forex rate table, in feed order.
    async fn fetch_forex(&self) -> Result<Vec<RateRecord>, FeedError>;

    /// Fetch the current bullion (gold/silver) quote.
    async fn fetch_bullion(&self) -> Result<BullionSnapshot, FeedError>;

    /// Convert `amount` between two currency codes via ExchangeRate-API.
    ///
    /// Codes must already be uppercased by the caller. Provider-side
    /// rejections come back as a successful fetch with `result == "error"`;
    /// only transport-level failures produce a [`FeedError`].
    async fn convert_pair(
        &self,
        api_key: &str,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<PairConversion, FeedError>;
}

/// reqwest-backed [`FeedFetcher`] with a bounded timeout per request.
pub struct HttpFeedFetcher {
    client: Client,
    forex_url: String,
    bullion_url: String,
}

impl HttpFeedFetcher {
    /// Create a fetcher bound to the configured feed URLs.
    pub fn new(forex_url: String, bullion_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            forex_url,
            bullion_url,
        }
    }

    /// GET `url` and decode the JSON body as `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FeedError> {
        tracing::debug!(url, "fetching feed");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::from_request(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                FeedError::Timeout {
                    url: url.to_string(),
                }
            } else if e.is_decode() {
                FeedError::Parse {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            } else {
                FeedError::Network(e)
            }
        })
    }
}

/// Build the ExchangeRate-API pair-conversion URL.
fn pair_url(api_key: &str, from: &str, to: &str, amount: f64) -> String {
    format!("{EXCHANGE_RATE_API_BASE}/{api_key}/pair/{from}/{to}/{amount}")
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch_forex(&self) -> Result<Vec<RateRecord>, FeedError> {
        self.get_json(&self.forex_url).await
    }

    async fn fetch_bullion(&self) -> Result<BullionSnapshot, FeedError> {
        self.get_json(&self.bullion_url).await
    }

    async fn convert_pair(
        &self,
        api_key: &str,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<PairConversion, FeedError> {
        let url = pair_url(api_key, from, to, amount);
        self.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_url_format() {
        let url = pair_url("key123", "USD", "EUR", 100.5);
        assert_eq!(
            url,
            "https://v6.exchangerate-api.com/v6/key123/pair/USD/EUR/100.5"
        );
    }

    #[test]
    fn test_pair_url_whole_amount() {
        let url = pair_url("k", "GBP", "NPR", 10.0);
        assert_eq!(url, "https://v6.exchangerate-api.com/v6/k/pair/GBP/NPR/10");
    }

    #[test]
    fn test_request_timeout_is_ten_seconds() {
        assert_eq!(REQUEST_TIMEOUT, Duration::from_secs(10));
    }
}
