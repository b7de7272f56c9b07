//! Route table and HTTP middleware

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use crate::error::ReviewError;
use crate::server::handlers;
use crate::server::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/analyze", post(handlers::analyze))
        .route("/process_reviews", post(handlers::process_reviews))
        .route("/trends_review", post(handlers::trends_review))
        .route("/summary_review", post(handlers::summary_review))
}

/// `*` allows any origin; anything else must be a single valid origin.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, ReviewError> {
    let origin = origin.trim();
    let allow_origin = if origin == "*" {
        AllowOrigin::from(Any)
    } else {
        let value = HeaderValue::from_str(origin)
            .map_err(|e| ReviewError::Config(format!("Invalid CORS origin '{}': {}", origin, e)))?;
        AllowOrigin::exact(value)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

/// The body limit follows the configured input limits instead of axum's
/// 2 MB default, so oversized collections reach validation.
pub fn build_router(state: AppState, cors_origin: &str) -> Result<Router, ReviewError> {
    let body_limit = state.limits.max_body_bytes();

    Ok(api_routes()
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors_layer(cors_origin)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
