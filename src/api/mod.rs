//! API handlers for Buzz REST endpoints

pub mod diagnostics;
pub mod health;
pub mod marc;
pub mod openapi;
pub mod records;
pub mod suggest;

use axum::{
    http::HeaderMap,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // FAST suggestions
        .route("/suggest", get(suggest::suggest))
        // Diagnostics
        .route("/diagnostics/scan", post(diagnostics::scan))
        .route("/diagnostics/rules", get(diagnostics::rules))
        // Format mode
        .route("/marc/convert", post(marc::convert))
        // Record navigation
        .route("/records/next", post(records::next_record))
        .route("/records/next-with-errors", post(records::next_record_with_errors))
        .route("/records/validate", post(records::validate))
        .route("/records/position", get(records::position))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Whether the editing page reached us over https (directly or via a proxy)
pub(crate) fn page_is_secure(headers: &HeaderMap) -> bool {
    headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .map(|proto| proto.eq_ignore_ascii_case("https"))
        .unwrap_or(false)
}
