use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use clinic_types::api::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Body could not be read into the request schema (missing, null or
    /// ill-typed field, malformed JSON or form encoding).
    #[error("{0}")]
    InvalidPayload(String),
    /// The insert itself was refused by the database.
    #[error("{0}")]
    Storage(String),
    #[error("Unsupported content type, expected JSON or url-encoded form data")]
    UnsupportedMediaType,
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload(_) | ApiError::Storage(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
