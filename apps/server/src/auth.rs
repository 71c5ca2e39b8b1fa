//! Optional shared-secret authentication middleware.
//!
//! Installed only when `MCP_AUTH_TOKEN` is configured. Requests must then
//! carry the secret in the `mcp-authentication` header: a missing header is
//! 401, a wrong token is 403. Tool handlers run only after this passes.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

/// Header carrying the shared secret
pub const AUTH_HEADER: &str = "mcp-authentication";

pub async fn require_auth(
    State(expected): State<Arc<String>>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Response {
    match headers.get(AUTH_HEADER).and_then(|value| value.to_str().ok()) {
        None => reject(
            StatusCode::UNAUTHORIZED,
            "Unauthorized: MCP-Auth header required",
        ),
        Some(token) if token != expected.as_str() => reject(
            StatusCode::FORBIDDEN,
            "Unauthorized: Invalid MCP authentication token",
        ),
        Some(_) => next.run(request).await,
    }
}

fn reject(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
