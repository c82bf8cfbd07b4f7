//! Response encoding and error mapping for the HTTP surface.
//!
//! Every body this service sends, success or error, is human-readable
//! indented JSON. Errors carry a structured `{"message": ...}` payload.

use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use bookshelf_core::CatalogError;
use serde::Serialize;
use thiserror::Error;

/// A JSON response body, pretty-printed.
///
/// Drop-in replacement for `axum::Json` that serializes with indentation so
/// the wire output stays human-readable.
pub struct IndentedJson<T>(pub T);

impl<T> IntoResponse for IndentedJson<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                err.to_string(),
            )
                .into_response(),
        }
    }
}

/// Error payload for failed requests.
///
/// The `message` field name and casing are part of the wire contract.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Errors surfaced at the handler boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No book matched the requested identifier.
    #[error("Book Not Found")]
    NotFound,
    /// The request payload failed structural JSON decoding.
    #[error("{0}")]
    InvalidPayload(#[from] JsonRejection),
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { .. } => ApiError::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Book Not Found".to_string()),
            ApiError::InvalidPayload(rejection) => (rejection.status(), rejection.body_text()),
        };
        (status, IndentedJson(ErrorBody { message })).into_response()
    }
}
