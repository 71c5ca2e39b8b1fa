//! HTTP router assembly.

mod health;
mod tools;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth;
use crate::config::Config;
use crate::main_lib::AppState;

/// Build the full application router.
///
/// The auth middleware wraps every API route (health included), matching
/// the reference gateway; CORS is wide open so browser-based MCP clients
/// can reach the tools from any origin.
pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let api = Router::new()
        .nest("/tools", tools::router())
        .merge(health::router())
        .with_state(state);

    let mut router = Router::new().nest("/api/v1", api);

    if let Some(token) = &config.auth_token {
        router = router.route_layer(middleware::from_fn_with_state(
            Arc::new(token.clone()),
            auth::require_auth,
        ));
    }

    router
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
