use async_trait::async_trait;
use chrono::Utc;
use paisa_feeds::FeedFetcher;
use std::sync::Arc;

use super::bullion_model::BullionReport;
use super::bullion_traits::BullionServiceTrait;
use crate::cache::MarketCache;
use crate::errors::Result;

/// Bullion lookup backed by the shared cache and the bullion feed.
pub struct BullionService {
    fetcher: Arc<dyn FeedFetcher>,
    cache: Arc<MarketCache>,
}

impl BullionService {
    pub fn new(fetcher: Arc<dyn FeedFetcher>, cache: Arc<MarketCache>) -> Self {
        Self { fetcher, cache }
    }
}

#[async_trait]
impl BullionServiceTrait for BullionService {
    async fn get_bullion_prices(&self) -> Result<BullionReport> {
        if let Some(snapshot) = self.cache.bullion.get_at(Utc::now())? {
            return Ok(BullionReport::from_snapshot(&snapshot, true));
        }

        // A fetch failure propagates here and leaves the slot unpopulated.
        let fresh = self.fetcher.fetch_bullion().await?;
        let expires_at = self.cache.bullion.set_at(fresh.clone(), Utc::now())?;
        log::debug!("bullion cache refreshed, valid until {}", expires_at);
        Ok(BullionReport::from_snapshot(&fresh, false))
    }
}
