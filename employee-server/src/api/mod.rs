//! API routes
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`employees`] - employee management

pub mod employees;
pub mod health;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build the fully configured application router
pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(employees::router())
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
