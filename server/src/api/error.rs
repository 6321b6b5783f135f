use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::collectors::CollectionError;

/// Body sent for every internal failure. The cause is only logged.
pub const INTERNAL_ERROR_BODY: &str = "Unable to get system info";

/// Unified application error type.
///
/// Implements [`IntoResponse`] so handlers can return `Result<T, AppError>`.
/// Every variant becomes the same plain-text 500; the cause stays in the
/// server log.
#[derive(Debug)]
pub enum AppError {
    /// A metrics reading failed.
    Collection(CollectionError),
    /// Anything else that went wrong while serving the request.
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Collection(e) => warn!(error = %e, "Metrics collection failed"),
            AppError::Internal(msg) => warn!(error = %msg, "Internal error"),
        }
        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
    }
}

impl From<CollectionError> for AppError {
    fn from(e: CollectionError) -> Self {
        AppError::Collection(e)
    }
}
