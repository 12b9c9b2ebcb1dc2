include!("../../lib.rs");
use tokio::io::BufReader;
use crate::catalog::console::ConsoleAdapter;
use crate::catalog::factory::create_catalog_service;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    setup_tracing(false);

    // in-memory unless CATALOG_STORE asks for the json snapshot
    let config = Configuration::from_env(RepositoryStore::Memory);
    let catalog = create_catalog_service(&config).await;
    let mut console = ConsoleAdapter::new(catalog, BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    console.run().await
}
