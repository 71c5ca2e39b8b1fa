use async_trait::async_trait;
use chrono::Utc;
use paisa_feeds::{FeedFetcher, RateRecord};
use std::sync::Arc;

use super::forex_model::{ForexLookup, ForexRate, ForexTable};
use super::forex_traits::ForexServiceTrait;
use crate::cache::MarketCache;
use crate::errors::{Result, ToolError};

/// Query token that requests the whole rate table.
const ALL_RATES_TOKEN: &str = "ALL";

/// Forex lookup backed by the shared cache and the forex feed.
pub struct ForexService {
    fetcher: Arc<dyn FeedFetcher>,
    cache: Arc<MarketCache>,
}

impl ForexService {
    pub fn new(fetcher: Arc<dyn FeedFetcher>, cache: Arc<MarketCache>) -> Self {
        Self { fetcher, cache }
    }

    /// The raw rate table, from cache or freshly fetched.
    ///
    /// A fetch failure leaves the slot untouched. Concurrent misses may
    /// fetch twice; the second write overwrites with equivalent data.
    async fn load_rates(&self) -> Result<Vec<RateRecord>> {
        if let Some(rates) = self.cache.forex.get_at(Utc::now())? {
            return Ok(rates);
        }

        let fresh = self.fetcher.fetch_forex().await?;
        let expires_at = self.cache.forex.set_at(fresh.clone(), Utc::now())?;
        log::debug!(
            "forex cache refreshed: {} rates, valid until {}",
            fresh.len(),
            expires_at
        );
        Ok(fresh)
    }
}

#[async_trait]
impl ForexServiceTrait for ForexService {
    async fn get_forex_rates(&self, currency: Option<&str>) -> Result<ForexLookup> {
        let rates = self.load_rates().await?;

        let query = currency.map(str::trim).filter(|q| !q.is_empty());
        let query = match query {
            None => return Ok(ForexLookup::All(ForexTable::new(rates))),
            Some(q) if q.eq_ignore_ascii_case(ALL_RATES_TOKEN) => {
                return Ok(ForexLookup::All(ForexTable::new(rates)))
            }
            Some(q) => q,
        };

        // First match in feed order wins.
        match rates
            .iter()
            .find(|record| record.currency.eq_ignore_ascii_case(query))
        {
            Some(record) => Ok(ForexLookup::Single(ForexRate::from_record(record))),
            None => Err(ToolError::CurrencyNotFound {
                requested: query.to_uppercase(),
                available: rates
                    .iter()
                    .map(|record| record.currency.to_uppercase())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}
