use async_trait::async_trait;
use paisa_feeds::FeedFetcher;
use std::sync::Arc;

use super::convert_model::ConversionReceipt;
use super::convert_traits::ConversionServiceTrait;
use crate::errors::{Result, ToolError};

/// Currency conversion via the ExchangeRate-API pair endpoint.
pub struct ConversionService {
    fetcher: Arc<dyn FeedFetcher>,
}

impl ConversionService {
    pub fn new(fetcher: Arc<dyn FeedFetcher>) -> Self {
        Self { fetcher }
    }
}

/// Map the provider's error codes to user-facing messages.
fn rejection_message(error_type: &str, from: &str, to: &str) -> String {
    match error_type {
        "unsupported-code" => {
            format!("Currency code not supported. Please check {} and {}.", from, to)
        }
        "malformed-request" => "Request format is invalid.".to_string(),
        "invalid-key" => "API key is invalid.".to_string(),
        "inactive-account" => "Account is inactive. Please confirm your email.".to_string(),
        "quota-reached" => "API quota has been reached.".to_string(),
        other => format!("Error: {}", other),
    }
}

#[async_trait]
impl ConversionServiceTrait for ConversionService {
    async fn convert_currency(
        &self,
        amount: f64,
        from_currency: &str,
        to_currency: &str,
        api_key: &str,
    ) -> Result<ConversionReceipt> {
        let from = from_currency.trim().to_uppercase();
        let to = to_currency.trim().to_uppercase();

        if amount <= 0.0 {
            return Err(ToolError::validation("Amount must be greater than 0"));
        }

        let data = self.fetcher.convert_pair(api_key, &from, &to, amount).await?;

        if data.result == "error" {
            let error_type = data.error_type.as_deref().unwrap_or("unknown");
            return Err(ToolError::validation(rejection_message(
                error_type, &from, &to,
            )));
        }

        let conversion_rate = data.conversion_rate.ok_or_else(|| ToolError::Unexpected {
            message: "provider response missing conversion_rate".to_string(),
        })?;
        let converted_amount = data.conversion_result.ok_or_else(|| ToolError::Unexpected {
            message: "provider response missing conversion_result".to_string(),
        })?;

        log::debug!("converted {} {} -> {} at {}", amount, from, to, conversion_rate);
        Ok(ConversionReceipt::new(
            from,
            to,
            amount,
            conversion_rate,
            converted_amount,
            data.time_last_update_utc,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paisa_feeds::{BullionSnapshot, FeedError, PairConversion, RateRecord};
    use std::sync::Mutex;

    struct StubFetcher {
        response: Mutex<Option<PairConversion>>,
        seen: Mutex<Option<(String, String, String, f64)>>,
    }

    impl StubFetcher {
        fn new(response: PairConversion) -> Self {
            Self {
                response: Mutex::new(Some(response)),
                seen: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl FeedFetcher for StubFetcher {
        async fn fetch_forex(&self) -> std::result::Result<Vec<RateRecord>, FeedError> {
            unimplemented!("not used by conversion tests")
        }

        async fn fetch_bullion(&self) -> std::result::Result<BullionSnapshot, FeedError> {
            unimplemented!("not used by conversion tests")
        }

        async fn convert_pair(
            &self,
            api_key: &str,
            from: &str,
            to: &str,
            amount: f64,
        ) -> std::result::Result<PairConversion, FeedError> {
            *self.seen.lock().unwrap() = Some((
                api_key.to_string(),
                from.to_string(),
                to.to_string(),
                amount,
            ));
            Ok(self.response.lock().unwrap().take().expect("single call"))
        }
    }

    fn success_response() -> PairConversion {
        PairConversion {
            result: "success".to_string(),
            error_type: None,
            conversion_rate: Some(0.8512),
            conversion_result: Some(85.12),
            time_last_update_utc: Some("Wed, 26 Aug 2026 00:00:01 +0000".to_string()),
        }
    }

    fn error_response(code: &str) -> PairConversion {
        PairConversion {
            result: "error".to_string(),
            error_type: Some(code.to_string()),
            conversion_rate: None,
            conversion_result: None,
            time_last_update_utc: None,
        }
    }

    #[tokio::test]
    async fn test_successful_conversion_builds_receipt() {
        let fetcher = Arc::new(StubFetcher::new(success_response()));
        let service = ConversionService::new(fetcher.clone());

        let receipt = service
            .convert_currency(100.0, " usd ", "eur", "key123")
            .await
            .unwrap();
        assert!(receipt.success);
        assert_eq!(receipt.from, "USD");
        assert_eq!(receipt.to, "EUR");
        assert_eq!(receipt.conversion_rate, 0.8512);
        assert_eq!(receipt.message, "100 USD = 85.12 EUR");

        // Codes are uppercased/trimmed before they reach the provider.
        let seen = fetcher.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen, ("key123".to_string(), "USD".to_string(), "EUR".to_string(), 100.0));
    }

    #[tokio::test]
    async fn test_non_positive_amount_is_rejected_before_fetch() {
        let fetcher = Arc::new(StubFetcher::new(success_response()));
        let service = ConversionService::new(fetcher.clone());

        let err = service
            .convert_currency(0.0, "USD", "EUR", "key123")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Amount must be greater than 0");
        assert!(fetcher.seen.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_provider_error_codes_map_to_messages() {
        let cases = [
            (
                "unsupported-code",
                "Currency code not supported. Please check USD and EUR.",
            ),
            ("malformed-request", "Request format is invalid."),
            ("invalid-key", "API key is invalid."),
            (
                "inactive-account",
                "Account is inactive. Please confirm your email.",
            ),
            ("quota-reached", "API quota has been reached."),
            ("something-else", "Error: something-else"),
        ];

        for (code, expected) in cases {
            let service = ConversionService::new(Arc::new(StubFetcher::new(error_response(code))));
            let err = service
                .convert_currency(100.0, "USD", "EUR", "key123")
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), expected);
        }
    }
}
