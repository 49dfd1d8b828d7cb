pub mod catalog;

use std::sync::Arc;

use bookshelf_kernel::ModuleRegistry;
use bookshelf_lookup::BookLookup;
use bookshelf_store::CatalogStore;

/// Register all project-specific modules with the registry
pub fn register_all(
    registry: &mut ModuleRegistry,
    store: Arc<dyn CatalogStore>,
    lookup: Arc<dyn BookLookup>,
) {
    registry.register(catalog::create_module(store, lookup));
}
