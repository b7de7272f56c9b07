//! Endpoint handlers. Each one validates the body, delegates to a service,
//! and serializes the result.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::models::{AggregateClassification, DocumentKind};
use crate::server::error::ApiResult;
use crate::server::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// `reviews` may be a list of strings or, for older clients, one string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ReviewsPayload {
    Many(Vec<String>),
    One(String),
}

impl Default for ReviewsPayload {
    fn default() -> Self {
        ReviewsPayload::Many(Vec::new())
    }
}

impl ReviewsPayload {
    pub fn into_reviews(self) -> Vec<String> {
        match self {
            ReviewsPayload::Many(reviews) => reviews,
            ReviewsPayload::One(review) => vec![review],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReviewsRequest {
    #[serde(default)]
    pub reviews: ReviewsPayload,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: String,
    pub uptime: u64,
}

/// `POST /analyze` -> `[sentiment, category, intent]`
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<Json<AggregateClassification>> {
    let Json(request) = payload?;
    tracing::info!(text_chars = request.text.chars().count(), "analyze request");

    let aggregate = state.orchestrator.classify(&request.text).await?;
    Ok(Json(aggregate))
}

/// `POST /process_reviews` -> `{"insights": ...}`
pub async fn process_reviews(
    State(state): State<AppState>,
    payload: Result<Json<ReviewsRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    aggregate_reviews(&state, DocumentKind::Insights, payload).await
}

/// `POST /trends_review` -> `{"trends": ...}`
pub async fn trends_review(
    State(state): State<AppState>,
    payload: Result<Json<ReviewsRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    aggregate_reviews(&state, DocumentKind::Trends, payload).await
}

/// `POST /summary_review` -> `{"summary": ...}`
pub async fn summary_review(
    State(state): State<AppState>,
    payload: Result<Json<ReviewsRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    aggregate_reviews(&state, DocumentKind::Summary, payload).await
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.model_name.clone(),
        uptime: state.uptime_seconds(),
    })
}

async fn aggregate_reviews(
    state: &AppState,
    kind: DocumentKind,
    payload: Result<Json<ReviewsRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(request) = payload?;
    let reviews = request.reviews.into_reviews();
    tracing::info!(kind = %kind, reviews = reviews.len(), "aggregation request");

    let document = state.aggregator.aggregate(kind, &reviews).await?;
    Ok(Json(document.to_response_body()))
}
