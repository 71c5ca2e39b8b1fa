//! Paisa Feeds Crate
//!
//! Upstream feed access for the Paisa gateway. This crate knows how to talk
//! to the two public NPR data sources (the forex rate feed and the bullion
//! price feed) and to the ExchangeRate-API pair-conversion endpoint.
//!
//! # Overview
//!
//! - [`RateRecord`] / [`BullionSnapshot`] / [`PairConversion`] - typed feed payloads
//! - [`FeedError`] - the closed set of distinguishable fetch failures
//! - [`FeedFetcher`] - the trait seam callers depend on
//! - [`HttpFeedFetcher`] - the reqwest implementation with a bounded timeout
//!
//! Fetches are single-attempt by design: a failed request surfaces
//! immediately as a [`FeedError`] and is never retried here. Callers that
//! want retry semantics layer them on top without reshaping the taxonomy.

pub mod errors;
pub mod fetcher;
pub mod models;

pub use errors::FeedError;
pub use fetcher::{FeedFetcher, HttpFeedFetcher};
pub use models::{BullionSnapshot, PairConversion, RateRecord};
