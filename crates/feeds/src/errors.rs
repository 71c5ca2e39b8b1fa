//! Error types for upstream feed access.

use thiserror::Error;

/// Errors that can occur while fetching an upstream feed.
///
/// Each variant maps to one of the distinguishable failure modes a single
/// fetch attempt can end in. There is no retry classification here because
/// feed fetches are never retried.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The request did not complete within the configured timeout.
    #[error("Timeout fetching {url}")]
    Timeout {
        /// The URL that timed out
        url: String,
    },

    /// The feed answered with a non-success HTTP status.
    #[error("HTTP status {status} from {url}")]
    HttpStatus {
        /// The HTTP status code returned by the feed
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The feed answered 2xx but the body could not be decoded.
    #[error("Malformed response from {url}: {message}")]
    Parse {
        /// The URL that was requested
        url: String,
        /// Decoder error detail
        message: String,
    },

    /// A network-level error occurred before any response arrived.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl FeedError {
    /// Classify a reqwest send/body error against the URL it hit.
    ///
    /// Timeouts get their own variant so callers can report them with the
    /// fixed user-facing message; everything else stays a network error.
    pub(crate) fn from_request(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Network(err)
        }
    }
}
