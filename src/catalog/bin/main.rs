include!("../../lib.rs");
use std::net::SocketAddr;
use crate::catalog::factory::create_catalog_service;
use crate::catalog::router::catalog_router;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    setup_tracing(true);

    let config = Configuration::from_env(RepositoryStore::JsonFile);
    let addr: SocketAddr = config.listen_addr.parse()?;
    let catalog = create_catalog_service(&config).await;
    let app = catalog_router(AppState::new(config.clone(), catalog));

    tracing::info!(%addr, store = %config.store, static_dir = %config.static_dir.display(), "catalog listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
