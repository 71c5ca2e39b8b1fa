//! Paisa Core - cache, expiration policy, and tool services.
//!
//! This crate contains the business logic of the gateway: the daily-expiring
//! in-memory cache shared by all requests, and the three tool operations
//! (forex lookup, bullion lookup, currency conversion) built on top of it.
//! It performs no HTTP itself; outbound access goes through the
//! `paisa_feeds::FeedFetcher` trait injected at construction time.

pub mod bullion;
pub mod cache;
pub mod convert;
pub mod errors;
pub mod forex;

// Re-export the cache handle and error types
pub use cache::MarketCache;
pub use errors::Result;
pub use errors::ToolError;
