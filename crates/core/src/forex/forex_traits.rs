use async_trait::async_trait;

use super::forex_model::ForexLookup;
use crate::errors::Result;

/// Trait defining the contract for the forex lookup tool.
#[async_trait]
pub trait ForexServiceTrait: Send + Sync {
    /// Look up forex rates, serving from cache when it is still fresh.
    ///
    /// `currency` of `None`, an empty string, or the literal token `ALL`
    /// (case-insensitive, trimmed) returns the whole table; anything else is
    /// matched case-insensitively against the cached records.
    async fn get_forex_rates(&self, currency: Option<&str>) -> Result<ForexLookup>;
}
