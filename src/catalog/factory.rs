use std::sync::Arc;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::Snapshot;
use crate::gateway::factory::create_publisher;

// builds the process-wide catalog and rehydrates it from the configured store.
// A missing or unreadable snapshot is logged and the catalog starts empty.
pub(crate) async fn create_catalog_service(config: &Configuration) -> Arc<dyn CatalogService> {
    let book_repo = factory::create_book_repository(config);
    let publisher = create_publisher(config.publisher);
    let svc = CatalogServiceImpl::new(config, book_repo, publisher);
    match svc.hydrate().await {
        Ok(Snapshot::Loaded(books)) => {
            tracing::info!(store = %config.store, books = books.len(), "loaded catalog snapshot");
        }
        Ok(Snapshot::NotFound) => {
            tracing::info!(store = %config.store, "no catalog snapshot found, starting empty");
        }
        Ok(Snapshot::Unparseable { message }) => {
            tracing::warn!(store = %config.store, "catalog snapshot could not be parsed, starting empty: {}", message);
        }
        Err(err) => {
            tracing::warn!(store = %config.store, "catalog snapshot could not be read, starting empty: {}", err);
        }
    }
    Arc::new(svc)
}
