//! Bookshelf HTTP Server - REST surface over the in-memory book catalog.
//!
//! This crate wires the catalog from `bookshelf-core` to an Axum router:
//! list, create, and fetch-by-id routes plus a health check. The binary in
//! `main.rs` and the integration tests share the same server code.

pub mod handlers;
pub mod response;
pub mod server;
