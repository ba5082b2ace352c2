//! Axum router construction for the people API.
//!
//! Assembles the routes into a single [`Router`] with CORS open to any
//! origin and per-request tracing.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- service metadata
/// - `GET /api/people` -- paged, denormalized people
///
/// Every response, including errors, carries
/// `Access-Control-Allow-Origin: *`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::about))
        .route("/api/people", get(handlers::list_people))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
