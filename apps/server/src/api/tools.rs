//! Tool invocation endpoints.
//!
//! Every tool responds 200 with a structured body: successes serialize the
//! service's typed response, failures become the uniform
//! `{"success": false, "error": <message>}` envelope. No tool error ever
//! propagates as an HTTP error status.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::main_lib::AppState;
use paisa_core::{Result, ToolError};

/// Fold a tool result into the uniform response envelope.
fn envelope<T: serde::Serialize>(result: Result<T>) -> Json<Value> {
    match result {
        Ok(response) => Json(serde_json::to_value(response).unwrap_or_else(|e| {
            json!({ "success": false, "error": format!("Unexpected error: {}", e) })
        })),
        Err(error) => {
            tracing::warn!(error = %error, "tool call failed");
            Json(json!({ "success": false, "error": error.to_string() }))
        }
    }
}

#[derive(Deserialize)]
struct ForexQuery {
    currency: Option<String>,
}

async fn get_forex_rates(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ForexQuery>,
) -> Json<Value> {
    envelope(
        state
            .forex_service
            .get_forex_rates(query.currency.as_deref())
            .await,
    )
}

async fn get_bullion_prices(State(state): State<Arc<AppState>>) -> Json<Value> {
    envelope(state.bullion_service.get_bullion_prices().await)
}

#[derive(Deserialize)]
struct ConvertRequest {
    amount: f64,
    from_currency: String,
    to_currency: String,
}

async fn convert_currency(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<ConvertRequest>,
) -> Json<Value> {
    // Per-request header key wins over the configured one.
    let api_key = headers
        .get("apikey")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .or_else(|| state.exchange_api_key.clone());

    let Some(api_key) = api_key else {
        return envelope::<Value>(Err(ToolError::validation(
            "API key not found. Please set EXCHANGE_API_KEY in .env file",
        )));
    };

    envelope(
        state
            .conversion_service
            .convert_currency(body.amount, &body.from_currency, &body.to_currency, &api_key)
            .await,
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/forex", get(get_forex_rates))
        .route("/bullion", get(get_bullion_prices))
        .route("/convert", post(convert_currency))
}
