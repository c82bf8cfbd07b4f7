//! HTTP server implementation using Axum.

use crate::handlers::{create_book, get_book, get_books, handle_health};
use axum::{routing::get, Router};
use bookshelf_core::Catalog;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers.
pub struct AppState {
    /// The in-memory book catalog
    pub catalog: Catalog,
}

/// Start the catalog HTTP server.
///
/// Returns the actual address the server is bound to (useful when port=0).
pub async fn start_server(catalog: Catalog, host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let state = Arc::new(AppState { catalog });

    // Build the router
    let app = Router::new()
        .route("/health", get(handle_health))
        .route("/books", get(get_books).post(create_book))
        .route("/books/:id", get(get_book))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Parse the address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // Bind to the address
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {}", actual_addr);

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server error");
    });

    Ok(actual_addr)
}
