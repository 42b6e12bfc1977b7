//! Error types for jotter

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid limit value")]
    InvalidLimit,

    #[error("Please provide a history record")]
    MissingNote,

    #[error("{0}")]
    MalformedBody(String),

    #[error("{0}")]
    Store(#[from] sqlx::Error),
}

/// Body shape shared by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::InvalidLimit | Error::MissingNote | Error::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::Store(err) => {
                tracing::error!(error = %err, "store query failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
