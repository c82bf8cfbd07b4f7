//! The catalog record type.

use serde::{Deserialize, Serialize};

/// A single book in the catalog.
///
/// All four fields are required when decoding a creation payload; anything
/// missing or mistyped is rejected before it reaches the catalog. The `id`
/// is supplied by the client and never generated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Identifier, intended to be unique within the catalog.
    pub id: String,
    /// Title, free text.
    pub title: String,
    /// Author, free text.
    pub author: String,
    /// Copies on hand. No range constraint; negative values are accepted.
    pub quantity: i64,
}
