//! Error type returned by mock handlers.
//!
//! Every variant serialises to the CyREST error body
//! (`{"data": {}, "errors": [{"status", "type", "message"}]}`) so the client
//! sees the same shapes it would see from Cytoscape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cyrest_api::error::{codes, ErrorResponse};

use crate::state::MockError;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    /// Cytoscape reports failed commands as 500s.
    CommandFailed(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, codes::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, codes::INVALID_PARAMETER, msg),
            AppError::CommandFailed(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, codes::COMMAND_FAILED, msg)
            }
        };
        tracing::debug!(%status, %message, "mock error response");
        let body = ErrorResponse::new(status.as_u16(), code, message);
        (status, Json(body)).into_response()
    }
}

impl From<MockError> for AppError {
    fn from(e: MockError) -> Self {
        match e {
            MockError::NotFound(msg) => AppError::NotFound(msg),
            MockError::Invalid(msg) => AppError::BadRequest(msg),
            MockError::CommandFailed(msg) => AppError::CommandFailed(msg),
        }
    }
}
