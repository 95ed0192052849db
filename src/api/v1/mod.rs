//! v1 API endpoints

pub mod examples;
pub mod repeat;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/repetitions", post(repeat::create_repetition))
        .route("/examples", get(examples::list_examples))
}
