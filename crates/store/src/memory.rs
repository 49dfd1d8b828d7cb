//! In-memory catalog store.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::{Book, CatalogStore, StoreError, StoreResult};

fn poisoned() -> StoreError {
    StoreError::Unavailable("catalog store lock poisoned".to_string())
}

/// Vec-backed store; listing order is insertion order. Writes are serialized
/// by the lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    books: RwLock<Vec<Book>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with the given records.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn save(&self, book: Book) -> StoreResult<Book> {
        let mut books = self.books.write().map_err(|_| poisoned())?;
        match books.iter_mut().find(|b| b.id == book.id) {
            Some(existing) => *existing = book.clone(),
            None => books.push(book.clone()),
        }
        Ok(book)
    }

    async fn find_all(&self) -> StoreResult<Vec<Book>> {
        let books = self.books.read().map_err(|_| poisoned())?;
        Ok(books.clone())
    }

    async fn delete_all(&self) -> StoreResult<()> {
        let mut books = self.books.write().map_err(|_| poisoned())?;
        books.clear();
        Ok(())
    }
}
