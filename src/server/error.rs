//! Conversion of service errors into `{"error": message}` responses

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use crate::error::ReviewError;

#[derive(Debug)]
pub struct ApiError(pub ReviewError);

impl ApiError {
    /// Status follows the innermost error so orchestration wrappers do not
    /// hide a caller mistake or a timeout.
    pub fn status(&self) -> StatusCode {
        match self.0.root_cause() {
            ReviewError::Validation(_) => StatusCode::BAD_REQUEST,
            ReviewError::MalformedOutput { .. } | ReviewError::ModelInvocation(_) => {
                StatusCode::BAD_GATEWAY
            }
            ReviewError::ModelTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(ReviewError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.0, "request failed");
        } else {
            tracing::info!(status = status.as_u16(), error = %self.0, "request rejected");
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
