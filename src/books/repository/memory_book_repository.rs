use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::{Snapshot, SnapshotRepository};

// MemoryBookRepository holds the last saved snapshot for the lifetime of the process
#[derive(Debug, Default)]
pub(crate) struct MemoryBookRepository {
    snapshot: Mutex<Option<Vec<BookEntity>>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_books(books: Vec<BookEntity>) -> Self {
        Self {
            snapshot: Mutex::new(Some(books)),
        }
    }
}

#[async_trait]
impl SnapshotRepository<BookEntity> for MemoryBookRepository {
    async fn load(&self) -> LibraryResult<Snapshot<BookEntity>> {
        match self.snapshot.lock().await.as_ref() {
            Some(books) => Ok(Snapshot::Loaded(books.clone())),
            None => Ok(Snapshot::NotFound),
        }
    }

    async fn save(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        *self.snapshot.lock().await = Some(entities.to_vec());
        Ok(entities.len())
    }
}

impl BookRepository for MemoryBookRepository {
}
