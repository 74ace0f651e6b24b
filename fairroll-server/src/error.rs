use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fairroll_core::{DiceError, ErrorBody};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServerError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Failure of a roll request, rendered as `{ "error": ... }`.
#[derive(Debug)]
pub struct ApiError(DiceError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<DiceError> for ApiError {
    fn from(err: DiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Error rolling dice: {}", self.0);
        } else {
            tracing::warn!("Rejected bet: {}", self.0);
        }

        (status, Json(ErrorBody::new(self.0.user_message()))).into_response()
    }
}
