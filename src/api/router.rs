//! HTTP router assembly

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::state::AppState;
use super::{accounts, health};

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Account endpoints
        .route("/signup", post(accounts::signup))
        .route("/accounts/{account_id}", get(accounts::get_account))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
