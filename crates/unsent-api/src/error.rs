use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// The two failure kinds the public surface distinguishes, plus
/// not-found for the detail view. Validation failures never reach the
/// store; store failures surface as a generic message with the cause
/// kept in the logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,
    #[error("Memory not found.")]
    NotFound,
    #[error("Error submitting your memory.")]
    Store(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Store(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingRequiredFields => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(cause) => {
                error!("Store call failed: {:#}", cause);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
