//! Book-enrichment workflow: remote lookup, mapping, persistence.

use std::sync::Arc;

use thiserror::Error;

use bookshelf_lookup::{BookLookup, LookupError, LookupOutcome, Volume};
use bookshelf_store::{Book, CatalogStore, StoreError};

/// Failures of the catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The supplied external id does not resolve to a usable remote record.
    /// Covers the provider's explicit not-found and descriptor-less payloads
    /// alike.
    #[error("Invalid external Book ID")]
    InvalidVolumeId,

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Catalog operations over the store and the remote lookup provider.
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
    lookup: Arc<dyn BookLookup>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>, lookup: Arc<dyn BookLookup>) -> Self {
        Self { store, lookup }
    }

    /// All catalog records in insertion order.
    pub async fn list(&self) -> Result<Vec<Book>, CatalogError> {
        Ok(self.store.find_all().await?)
    }

    /// Fetch metadata for the given external id, map it to a record, and
    /// persist it.
    ///
    /// Exactly one record is persisted on success, none on any failure; the
    /// store write happens only after the mapping is fully validated.
    pub async fn add_from_lookup(&self, volume_id: &str) -> Result<Book, CatalogError> {
        let volume = match self.lookup.volume_by_id(volume_id).await? {
            LookupOutcome::Found(volume) => volume,
            LookupOutcome::NotFound => return Err(CatalogError::InvalidVolumeId),
        };

        let book = map_volume(volume).ok_or(CatalogError::InvalidVolumeId)?;
        Ok(self.store.save(book).await?)
    }
}

/// Map a volume descriptor to a catalog record. Only the first listed author
/// is retained. A descriptor without volume info is unusable.
fn map_volume(volume: Volume) -> Option<Book> {
    let info = volume.volume_info?;
    let author = info.authors.and_then(|authors| authors.into_iter().next());
    Some(Book::new(volume.id, info.title, author, info.page_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bookshelf_lookup::VolumeInfo;
    use bookshelf_store::{MemoryStore, StoreResult};

    fn volume(id: &str, title: &str, authors: Option<Vec<&str>>, page_count: Option<u32>) -> Volume {
        Volume {
            id: id.to_string(),
            volume_info: Some(VolumeInfo {
                title: title.to_string(),
                authors: authors.map(|a| a.into_iter().map(str::to_string).collect()),
                page_count,
            }),
        }
    }

    /// Lookup double that always answers with the configured outcome.
    struct FixedLookup(Result<LookupOutcome, fn() -> LookupError>);

    impl FixedLookup {
        fn found(volume: Volume) -> Self {
            Self(Ok(LookupOutcome::Found(volume)))
        }

        fn not_found() -> Self {
            Self(Ok(LookupOutcome::NotFound))
        }

        fn failing(make: fn() -> LookupError) -> Self {
            Self(Err(make))
        }
    }

    #[async_trait]
    impl BookLookup for FixedLookup {
        async fn volume_by_id(&self, _volume_id: &str) -> Result<LookupOutcome, LookupError> {
            match &self.0 {
                Ok(outcome) => Ok(outcome.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    /// Store double whose writes always fail.
    struct FailingStore;

    #[async_trait]
    impl CatalogStore for FailingStore {
        async fn save(&self, _book: Book) -> StoreResult<Book> {
            Err(StoreError::Unavailable("backend offline".to_string()))
        }

        async fn find_all(&self) -> StoreResult<Vec<Book>> {
            Ok(vec![])
        }

        async fn delete_all(&self) -> StoreResult<()> {
            Ok(())
        }
    }

    fn service_with(store: Arc<dyn CatalogStore>, lookup: impl BookLookup + 'static) -> CatalogService {
        CatalogService::new(store, Arc::new(lookup))
    }

    #[tokio::test]
    async fn first_listed_author_is_retained() {
        let store = Arc::new(MemoryStore::new());
        let lookup = FixedLookup::found(volume(
            "v1",
            "A Title",
            Some(vec!["Joe Kissell", "Someone Else"]),
            None,
        ));

        let book = service_with(store.clone(), lookup)
            .add_from_lookup("v1")
            .await
            .unwrap();

        assert_eq!(book.author.as_deref(), Some("Joe Kissell"));
    }

    #[tokio::test]
    async fn empty_or_absent_author_list_maps_to_none() {
        let store = Arc::new(MemoryStore::new());
        let lookup = FixedLookup::found(volume("v1", "A Title", Some(vec![]), None));
        let book = service_with(store, lookup).add_from_lookup("v1").await.unwrap();
        assert!(book.author.is_none());

        let store = Arc::new(MemoryStore::new());
        let lookup = FixedLookup::found(volume("v2", "A Title", None, None));
        let book = service_with(store, lookup).add_from_lookup("v2").await.unwrap();
        assert!(book.author.is_none());
    }

    #[tokio::test]
    async fn success_persists_exactly_one_record_with_mapped_fields() {
        let store = Arc::new(MemoryStore::new());
        let lookup = FixedLookup::found(volume(
            "cOYLEQAAQBAJ",
            "Take Control of Your Online Privacy, 5th Edition",
            Some(vec!["Joe Kissell"]),
            Some(137),
        ));

        let book = service_with(store.clone(), lookup)
            .add_from_lookup("cOYLEQAAQBAJ")
            .await
            .unwrap();

        assert_eq!(book.id, "cOYLEQAAQBAJ");
        assert_eq!(book.title, "Take Control of Your Online Privacy, 5th Edition");
        assert_eq!(book.page_count, Some(137));

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], book);
    }

    #[tokio::test]
    async fn provider_not_found_persists_nothing() {
        let store = Arc::new(MemoryStore::new());
        let result = service_with(store.clone(), FixedLookup::not_found())
            .add_from_lookup("invalid-id")
            .await;

        assert!(matches!(result, Err(CatalogError::InvalidVolumeId)));
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn descriptor_less_payload_is_treated_as_invalid_id() {
        let store = Arc::new(MemoryStore::new());
        let lookup = FixedLookup::found(Volume {
            id: "v1".to_string(),
            volume_info: None,
        });

        let result = service_with(store.clone(), lookup).add_from_lookup("v1").await;

        assert!(matches!(result, Err(CatalogError::InvalidVolumeId)));
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn provider_failure_is_not_conflated_with_invalid_id() {
        let store = Arc::new(MemoryStore::new());
        let lookup = FixedLookup::failing(|| LookupError::Status(503));

        let result = service_with(store.clone(), lookup).add_from_lookup("v1").await;

        assert!(matches!(result, Err(CatalogError::Lookup(LookupError::Status(503)))));
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let lookup = FixedLookup::found(volume("v1", "A Title", None, None));
        let result = service_with(Arc::new(FailingStore), lookup)
            .add_from_lookup("v1")
            .await;

        assert!(matches!(result, Err(CatalogError::Store(_))));
    }

    #[tokio::test]
    async fn list_returns_store_contents_in_order() {
        let store = Arc::new(MemoryStore::with_books(vec![
            Book::new("a", "first", None, None),
            Book::new("b", "second", None, None),
        ]));
        let service = service_with(store, FixedLookup::not_found());

        let titles: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["first", "second"]);
    }
}
