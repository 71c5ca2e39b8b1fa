//! Paisa server - HTTP surface for the NPR market-rates tools.
//!
//! Exposed as a library so integration tests can build the router with a
//! stubbed feed fetcher; the binary in `main.rs` is a thin wrapper.

pub mod api;
pub mod auth;
pub mod config;
pub mod main_lib;

pub use config::Config;
pub use main_lib::{build_state, build_state_with_fetcher, init_tracing, AppState};
