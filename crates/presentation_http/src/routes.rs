//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
///
/// Static report paths win over the `{start}` capture, so
/// `/api/v1.0/stations` never reaches the summary handler.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Route index
        .route("/", get(handlers::index::index))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Reports (v1.0)
        .route(
            "/api/v1.0/precipitation",
            get(handlers::climate::precipitation),
        )
        .route("/api/v1.0/stations", get(handlers::climate::stations))
        .route("/api/v1.0/tobs", get(handlers::climate::tobs))
        .route(
            "/api/v1.0/{start}",
            get(handlers::temperature::summary_from),
        )
        .route(
            "/api/v1.0/{start}/{end}",
            get(handlers::temperature::summary_between),
        )
        .fallback(handlers::not_found)
        // Attach state
        .with_state(state)
}
