use async_trait::async_trait;

use super::bullion_model::BullionReport;
use crate::errors::Result;

/// Trait defining the contract for the bullion lookup tool.
#[async_trait]
pub trait BullionServiceTrait: Send + Sync {
    /// Current gold and silver prices, served from cache when fresh.
    async fn get_bullion_prices(&self) -> Result<BullionReport>;
}
