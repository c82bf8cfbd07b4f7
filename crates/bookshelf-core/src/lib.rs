//! Bookshelf Core - in-memory book catalog.
//!
//! This crate owns the catalog behind the Bookshelf HTTP service: an
//! insertion-ordered sequence of books with identifier lookup, seeded at
//! process start with a fixed set of entries. All catalog access is
//! serialized internally, so one instance can be shared across concurrent
//! request handlers.
//!
//! # Example
//!
//! ```rust,ignore
//! use bookshelf_core::Catalog;
//!
//! let catalog = Catalog::with_seed();
//! let all = catalog.list().await;
//! let book = catalog.find_by_id("2").await?;
//! ```

pub mod book;
pub mod catalog;
pub mod error;

pub use book::Book;
pub use catalog::Catalog;
pub use error::{CatalogError, Result};
