mod modules;

use std::sync::Arc;

use anyhow::Context;
use bookshelf_kernel::settings::Settings;
use bookshelf_kernel::{InitCtx, ModuleRegistry};
use bookshelf_lookup::{BookLookup, GoogleVolumes};
use bookshelf_store::{CatalogStore, MemoryStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load bookshelf settings")?;

    bookshelf_telemetry::init(&settings.telemetry);

    tracing::info!(
        env = ?settings.environment,
        lookup = %settings.lookup.base_url,
        "bookshelf bootstrap starting"
    );

    let store: Arc<dyn CatalogStore> = Arc::new(MemoryStore::new());
    let lookup: Arc<dyn BookLookup> = Arc::new(
        GoogleVolumes::new(&settings.lookup).context("failed to build lookup client")?,
    );

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, store, lookup);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    bookshelf_http::start_server(&registry, &settings).await?;

    registry.stop_modules().await?;

    tracing::info!("bookshelf shutdown complete");
    Ok(())
}
