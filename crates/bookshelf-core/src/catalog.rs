//! In-memory catalog store.
//!
//! The Catalog is the registry of books behind the HTTP handlers. Entries
//! stay in insertion order and identifier lookups resolve to the first
//! match. Every operation goes through a single reader-writer lock so
//! concurrent handlers cannot corrupt the sequence.

use crate::book::Book;
use crate::error::{CatalogError, Result};
use tokio::sync::RwLock;
use tracing::debug;

/// The fixed set of books the service starts with.
fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: "1".to_string(),
            title: "Shoe Dog".to_string(),
            author: "Phil Knight".to_string(),
            quantity: 2,
        },
        Book {
            id: "2".to_string(),
            title: "Zero to One".to_string(),
            author: "Peter Thiel".to_string(),
            quantity: 1,
        },
        Book {
            id: "3".to_string(),
            title: "Crime and Punishment".to_string(),
            author: "Fyodor D".to_string(),
            quantity: 2,
        },
    ]
}

/// The in-memory book catalog.
///
/// Books stay in insertion order for the lifetime of the process. Lookup
/// scans in order, so duplicate ids resolve to the earliest insertion. All
/// access goes through an internal `RwLock`: reads run concurrently, writes
/// are exclusive.
#[derive(Default)]
pub struct Catalog {
    books: RwLock<Vec<Book>>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
        }
    }

    /// Create a catalog pre-populated with the fixed seed set.
    pub fn with_seed() -> Self {
        Self {
            books: RwLock::new(seed_books()),
        }
    }

    /// Return every book, in insertion order.
    ///
    /// The result is a snapshot copy; holding it does not block writers and
    /// cannot corrupt the internal sequence.
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// Append a book to the end of the catalog.
    ///
    /// No validation and no uniqueness check; a duplicate id is stored as-is
    /// and lookups keep resolving to the earliest insertion.
    pub async fn append(&self, book: Book) {
        debug!("Appending book: {}", book.id);
        self.books.write().await.push(book);
    }

    /// Find a book by identifier.
    ///
    /// Scans in insertion order and returns a copy of the first match. A
    /// missing id is an explicit [`CatalogError::NotFound`], never an empty
    /// placeholder.
    pub async fn find_by_id(&self, id: &str) -> Result<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    /// Replace the earliest book whose id matches.
    ///
    /// This is the explicit mutation path for stored entries; the change is
    /// visible to every subsequent read.
    pub async fn update(&self, id: &str, book: Book) -> Result<()> {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                *entry = book;
                debug!("Updated book: {}", id);
                Ok(())
            }
            None => Err(CatalogError::NotFound { id: id.to_string() }),
        }
    }
}
