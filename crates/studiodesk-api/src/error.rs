use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use studiodesk_analytics::AnalyticsError;
use studiodesk_flow::{FlowError, GatewayError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Session is busy with a previous message")]
    Conflict,

    #[error("Turn failed: {0}")]
    Turn(String),
}

impl From<FlowError> for ApiError {
    fn from(error: FlowError) -> Self {
        match error {
            FlowError::EmptyInput => ApiError::BadRequest(error.to_string()),
            FlowError::Busy => ApiError::Conflict,
            FlowError::SessionNotFound(id) => ApiError::SessionNotFound(id),
            FlowError::Gateway(e) => e.into(),
            FlowError::Task(msg) => ApiError::Turn(msg),
        }
    }
}

impl From<GatewayError> for ApiError {
    fn from(error: GatewayError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<AnalyticsError> for ApiError {
    fn from(error: AnalyticsError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::SessionNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Conflict => (StatusCode::CONFLICT, self.to_string()),
            ApiError::Turn(ref msg) => {
                tracing::error!("Turn error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Processing error".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
