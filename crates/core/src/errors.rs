//! Core error types for the Paisa gateway.
//!
//! Every tool operation returns `Result<_, ToolError>`. The `Display`
//! strings here are the user-visible error messages: the server layer folds
//! any `Err` into the uniform `{"success": false, "error": <message>}`
//! envelope, so the exact wording matters and is covered by tests.

use paisa_feeds::FeedError;
use thiserror::Error;

/// Type alias for Result using our ToolError type.
pub type Result<T> = std::result::Result<T, ToolError>;

/// The closed set of failures a tool operation can end in.
#[derive(Error, Debug)]
pub enum ToolError {
    /// An upstream fetch exceeded the request timeout.
    #[error("Request timed out. Please try again.")]
    Timeout,

    /// An upstream feed answered with a non-success HTTP status.
    #[error("HTTP error occurred: {status}")]
    UpstreamHttp {
        /// The status code the feed returned
        status: u16,
    },

    /// The requested forex currency is not in the rate table.
    #[error("Currency '{requested}' not found. Available currencies: {available}")]
    CurrencyNotFound {
        /// The requested code, uppercased
        requested: String,
        /// All available codes, uppercased and comma-separated
        available: String,
    },

    /// The request was rejected before or by the conversion provider.
    ///
    /// Covers non-positive amounts, missing API keys, and the provider's
    /// own error codes mapped to user-facing messages. Displayed verbatim.
    #[error("{reason}")]
    Validation {
        /// The user-facing rejection message
        reason: String,
    },

    /// The shared cache could not be read or written (lock poisoned).
    #[error("Cache error: {message}")]
    Cache {
        /// Lock error detail
        message: String,
    },

    /// Anything else; carries the underlying error's message.
    #[error("Unexpected error: {message}")]
    Unexpected {
        /// The underlying error's message
        message: String,
    },
}

impl ToolError {
    /// Shorthand for a [`ToolError::Validation`] rejection.
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }
}

impl From<FeedError> for ToolError {
    fn from(err: FeedError) -> Self {
        match err {
            FeedError::Timeout { .. } => Self::Timeout,
            FeedError::HttpStatus { status, .. } => Self::UpstreamHttp { status },
            FeedError::Parse { .. } | FeedError::Network(_) => Self::Unexpected {
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_is_fixed() {
        assert_eq!(
            format!("{}", ToolError::Timeout),
            "Request timed out. Please try again."
        );
    }

    #[test]
    fn test_upstream_http_message_format() {
        let error = ToolError::UpstreamHttp { status: 500 };
        assert_eq!(format!("{}", error), "HTTP error occurred: 500");
    }

    #[test]
    fn test_currency_not_found_message_format() {
        let error = ToolError::CurrencyNotFound {
            requested: "XYZ".to_string(),
            available: "USD, EUR, GBP".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Currency 'XYZ' not found. Available currencies: USD, EUR, GBP"
        );
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let error = ToolError::validation("Amount must be greater than 0");
        assert_eq!(format!("{}", error), "Amount must be greater than 0");
    }

    #[test]
    fn test_feed_timeout_maps_to_timeout() {
        let feed = FeedError::Timeout {
            url: "https://feed.example/forex".to_string(),
        };
        assert!(matches!(ToolError::from(feed), ToolError::Timeout));
    }

    #[test]
    fn test_feed_http_status_maps_to_upstream_http() {
        let feed = FeedError::HttpStatus {
            status: 503,
            url: "https://feed.example/bullion".to_string(),
        };
        assert!(matches!(
            ToolError::from(feed),
            ToolError::UpstreamHttp { status: 503 }
        ));
    }

    #[test]
    fn test_feed_parse_maps_to_unexpected() {
        let feed = FeedError::Parse {
            url: "https://feed.example/forex".to_string(),
            message: "expected value".to_string(),
        };
        let error = ToolError::from(feed);
        assert!(matches!(error, ToolError::Unexpected { .. }));
        assert!(format!("{}", error).starts_with("Unexpected error: "));
    }
}
