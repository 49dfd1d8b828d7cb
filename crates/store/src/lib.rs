//! Catalog persistence for book records.

pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use memory::MemoryStore;

/// A catalog book record.
///
/// The id equals the remote provider's volume id and is immutable once
/// persisted. Only the first listed author is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub page_count: Option<u32>,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: Option<String>,
        page_count: Option<u32>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author,
            page_count,
        }
    }
}

/// Failures a catalog store backend may report. The bundled in-memory store
/// never fails, but the trait admits fallible backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("catalog store unavailable: {0}")]
    Unavailable(String),
}

/// A specialized Result type for catalog store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence abstraction for book records.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Persist a record, upserting by id. An existing record keeps its
    /// position in insertion order. Returns the persisted record.
    async fn save(&self, book: Book) -> StoreResult<Book>;

    /// All records in insertion order.
    async fn find_all(&self) -> StoreResult<Vec<Book>>;

    /// Remove every record.
    async fn delete_all(&self) -> StoreResult<()>;
}
