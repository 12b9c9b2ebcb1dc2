use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tokio::fs;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{Snapshot, SnapshotRepository};

// JsonBookRepository keeps the whole catalog as a single JSON array on disk.
#[derive(Debug)]
pub(crate) struct JsonBookRepository {
    path: PathBuf,
}

impl JsonBookRepository {
    pub(crate) fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl SnapshotRepository<BookEntity> for JsonBookRepository {
    async fn load(&self) -> LibraryResult<Snapshot<BookEntity>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(Snapshot::NotFound);
            }
            Err(err) => {
                return Err(LibraryError::from(err));
            }
        };
        match serde_json::from_slice::<Vec<BookEntity>>(&bytes) {
            Ok(books) => Ok(Snapshot::Loaded(books)),
            Err(err) => Ok(Snapshot::Unparseable { message: format!("{} {}", self.path.display(), err) }),
        }
    }

    // the temporary file is renamed over the target so a crash never leaves a half-written snapshot
    async fn save(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        let json = serde_json::to_vec_pretty(entities)?;
        let temp = self.temp_path();
        fs::write(&temp, json).await?;
        fs::rename(&temp, &self.path).await?;
        tracing::debug!(path = %self.path.display(), books = entities.len(), "saved catalog snapshot");
        Ok(entities.len())
    }
}

impl BookRepository for JsonBookRepository {
}
