use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::health;
use super::state::AppState;
use super::v1;

/// Create the full router with application state
///
/// CORS is permissive: the expected caller is a browser form served from
/// anywhere.
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // v1 API
        .nest("/v1", v1::create_v1_router())
        // Add state and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
