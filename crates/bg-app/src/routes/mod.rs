//! Route definitions and router builder.

pub mod health;
pub mod root;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with both routes and request tracing.
///
/// Unknown paths and methods get Axum's default 404 / 405.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::banner))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
