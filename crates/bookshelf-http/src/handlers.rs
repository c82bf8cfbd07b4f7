//! Request handlers for the catalog routes.
//!
//! Each handler is a single-shot translation between one request shape and
//! the catalog operations behind it. No retries, no state beyond `AppState`.

use crate::response::{ApiError, IndentedJson};
use crate::server::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use bookshelf_core::Book;
use serde_json::json;
use std::sync::Arc;

/// Health check endpoint.
pub async fn handle_health() -> impl IntoResponse {
    IndentedJson(json!({"status": "ok"}))
}

/// List every book in the catalog, in insertion order.
pub async fn get_books(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    IndentedJson(state.catalog.list().await)
}

/// Add a book from a JSON payload and echo the decoded book back.
///
/// A payload that fails structural decoding gets an explicit client error
/// and leaves the catalog untouched.
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Book>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(book) = payload?;
    state.catalog.append(book.clone()).await;
    Ok(IndentedJson(book))
}

/// Fetch a single book by the id route parameter.
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let book = state.catalog.find_by_id(&id).await?;
    Ok(IndentedJson(book))
}
