use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::snip::SnipRecord;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    /// The engine ran but could not isolate a fragment; the full result
    /// record is relayed so clients can inspect the diagnostic and any
    /// partial extraction.
    #[error("{message}")]
    Extraction { message: String, record: SnipRecord },
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({ "error": message })),
            )
                .into_response(),
            ApiError::Extraction { message, record } => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({ "error": message, "result": record })),
            )
                .into_response(),
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
