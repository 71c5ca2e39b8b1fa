use std::sync::Arc;

use crate::config::Config;
use paisa_core::bullion::{BullionService, BullionServiceTrait};
use paisa_core::convert::{ConversionService, ConversionServiceTrait};
use paisa_core::forex::{ForexService, ForexServiceTrait};
use paisa_core::MarketCache;
use paisa_feeds::{FeedFetcher, HttpFeedFetcher};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub forex_service: Arc<dyn ForexServiceTrait + Send + Sync>,
    pub bullion_service: Arc<dyn BullionServiceTrait + Send + Sync>,
    pub conversion_service: Arc<dyn ConversionServiceTrait + Send + Sync>,
    /// Fallback conversion API key when the request carries no `apikey` header.
    pub exchange_api_key: Option<String>,
}

pub fn init_tracing() {
    let log_format = std::env::var("PAISA_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let fetcher: Arc<dyn FeedFetcher> = Arc::new(HttpFeedFetcher::new(
        config.forex_url.clone(),
        config.bullion_url.clone(),
    ));
    build_state_with_fetcher(config, fetcher)
}

/// Wire up the services around an injected fetcher.
///
/// The `MarketCache` constructed here is the single shared cache instance
/// for the process lifetime; everything else holds it through an `Arc`.
pub fn build_state_with_fetcher(config: &Config, fetcher: Arc<dyn FeedFetcher>) -> Arc<AppState> {
    let cache = Arc::new(MarketCache::new());

    let forex_service = Arc::new(ForexService::new(fetcher.clone(), cache.clone()));
    let bullion_service = Arc::new(BullionService::new(fetcher.clone(), cache.clone()));
    let conversion_service = Arc::new(ConversionService::new(fetcher));

    Arc::new(AppState {
        forex_service,
        bullion_service,
        conversion_service,
        exchange_api_key: config.exchange_api_key.clone(),
    })
}
