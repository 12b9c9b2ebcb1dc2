use std::env;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::core::repository::RepositoryStore;
use crate::gateway::GatewayPublisherVia;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}


// Configuration abstracts config options for the catalog binaries
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub branch_id: String,
    pub store: RepositoryStore,
    pub publisher: GatewayPublisherVia,
    pub data_file: PathBuf,
    pub static_dir: PathBuf,
    pub listen_addr: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            store: RepositoryStore::Memory,
            publisher: GatewayPublisherVia::Logs,
            data_file: PathBuf::from("libros.json"),
            static_dir: PathBuf::from("static"),
            listen_addr: "0.0.0.0:8000".to_string(),
        }
    }

    // reads CATALOG_* variables; anything unset keeps its default
    pub fn from_env(default_store: RepositoryStore) -> Self {
        Self::from_lookup(default_store, |key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(default_store: RepositoryStore, lookup: F) -> Self {
        let mut config = Configuration::new(
            lookup("CATALOG_BRANCH").unwrap_or_else(|| "main".to_string()).as_str());
        config.store = match lookup("CATALOG_STORE").map(RepositoryStore::try_from) {
            Some(Ok(store)) => store,
            Some(Err(err)) => {
                tracing::warn!(fallback = %default_store, "ignoring CATALOG_STORE: {}", err);
                default_store
            }
            None => default_store,
        };
        if let Some(file) = lookup("CATALOG_DATA_FILE") {
            config.data_file = PathBuf::from(file);
        }
        if let Some(dir) = lookup("CATALOG_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(addr) = lookup("CATALOG_LISTEN_ADDR") {
            config.listen_addr = addr;
        }
        config
    }

    pub fn with_store(mut self, store: RepositoryStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_data_file<P: Into<PathBuf>>(mut self, data_file: P) -> Self {
        self.data_file = data_file.into();
        self
    }

    pub fn with_static_dir<P: Into<PathBuf>>(mut self, static_dir: P) -> Self {
        self.static_dir = static_dir.into();
        self
    }
}
