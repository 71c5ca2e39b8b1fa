use async_trait::async_trait;

use super::convert_model::ConversionReceipt;
use crate::errors::Result;

/// Trait defining the contract for the currency conversion tool.
#[async_trait]
pub trait ConversionServiceTrait: Send + Sync {
    /// Convert `amount` from one currency to another via the conversion
    /// provider. Not cached; every call hits the provider.
    async fn convert_currency(
        &self,
        amount: f64,
        from_currency: &str,
        to_currency: &str,
        api_key: &str,
    ) -> Result<ConversionReceipt>;
}
