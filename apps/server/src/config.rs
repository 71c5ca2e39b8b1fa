//! Server configuration, resolved once at startup from the environment.

use anyhow::Context;
use std::env;

/// Everything the server needs from the environment, resolved up front and
/// passed into the composition root instead of read ad hoc in handlers.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP listener to (`PAISA_LISTEN_ADDR`)
    pub listen_addr: String,
    /// Forex feed URL (`FOREX_URL`, required)
    pub forex_url: String,
    /// Bullion feed URL (`BULLION_URL`, required)
    pub bullion_url: String,
    /// Default ExchangeRate-API key (`EXCHANGE_API_KEY`); a per-request
    /// `apikey` header takes precedence over this
    pub exchange_api_key: Option<String>,
    /// Shared secret for the `mcp-authentication` header (`MCP_AUTH_TOKEN`);
    /// the auth middleware is only installed when this is set and non-empty
    pub auth_token: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            listen_addr: env::var("PAISA_LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
            forex_url: env::var("FOREX_URL").context("FOREX_URL must be set")?,
            bullion_url: env::var("BULLION_URL").context("BULLION_URL must be set")?,
            exchange_api_key: env_nonempty("EXCHANGE_API_KEY"),
            auth_token: env_nonempty("MCP_AUTH_TOKEN"),
        })
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
