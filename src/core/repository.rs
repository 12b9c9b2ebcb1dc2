use async_trait::async_trait;
use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// Snapshot is the outcome of loading a persisted collection
#[derive(Debug, PartialEq)]
pub enum Snapshot<Entity> {
    Loaded(Vec<Entity>),
    NotFound,
    Unparseable {
        message: String,
    },
}

#[async_trait]
pub trait SnapshotRepository<Entity>: Sync + Send {
    // reads the whole persisted collection
    async fn load(&self) -> LibraryResult<Snapshot<Entity>>;

    // overwrites the persisted collection, returns number of entities written
    async fn save(&self, entities: &[Entity]) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    JsonFile,
    Memory,
}

impl TryFrom<String> for RepositoryStore {
    type Error = LibraryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "json" | "jsonfile" | "file" => Ok(RepositoryStore::JsonFile),
            "memory" | "mem" => Ok(RepositoryStore::Memory),
            other => Err(LibraryError::validation(
                format!("unknown repository store {:?}", other).as_str(), Some("store".to_string()))),
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::JsonFile => write!(f, "JsonFile"),
            RepositoryStore::Memory => write!(f, "Memory"),
        }
    }
}
