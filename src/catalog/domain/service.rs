use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookChanges, BookDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::{CatalogService, Placement};
use crate::catalog::domain::model::Catalog;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Snapshot;
use crate::gateway::events::EventPublisher;

// CatalogServiceImpl serializes every operation through a single lock around the
// catalog. Snapshots are written while the lock is held so they land in mutation order.
pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    catalog: Mutex<Catalog>,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            catalog: Mutex::new(Catalog::new()),
            book_repository,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    async fn persist(&self, catalog: &Catalog) -> LibraryResult<()> {
        self.book_repository.save(&catalog.list_all()).await.map(|_| ())
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn hydrate(&self) -> LibraryResult<Snapshot<BookEntity>> {
        let snapshot = self.book_repository.load().await?;
        let mut catalog = self.catalog.lock().await;
        catalog.clear();
        match snapshot {
            Snapshot::Loaded(books) => {
                let mut loaded = Vec::with_capacity(books.len());
                for book in books {
                    match catalog.insert_at_tail(book.clone()) {
                        Ok(_) => loaded.push(book),
                        Err(err) => tracing::warn!(isbn = %book.isbn, "skipping snapshot record: {}", err),
                    }
                }
                Ok(Snapshot::Loaded(loaded))
            }
            other => Ok(other),
        }
    }

    async fn add_book(&self, book: &BookDto, placement: Placement) -> LibraryResult<BookDto> {
        let mut catalog = self.catalog.lock().await;
        let entity = BookEntity::from(book);
        match placement {
            Placement::Head => catalog.insert_at_head(entity)?,
            Placement::Tail => catalog.insert_at_tail(entity)?,
            Placement::Position(index) => catalog.insert_at_position(entity, index)?,
        }
        self.persist(&catalog).await?;
        let mut metadata = self.metadata();
        metadata.insert("placement".to_string(), format!("{:?}", placement));
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "books", book.id().as_str(), &metadata, book)?).await?;
        tracing::info!(isbn = %book.isbn, ?placement, position = ?catalog.position_of(book.isbn.as_str()),
            size = catalog.len(), "added book");
        Ok(book.clone())
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        let mut catalog = self.catalog.lock().await;
        let removed = BookDto::from(&catalog.remove_by_key(isbn)?);
        self.persist(&catalog).await?;
        let _ = self.events_publisher.publish(&DomainEvent::deleted(
            "books", isbn, &self.metadata(), &removed)?).await?;
        tracing::info!(isbn, size = catalog.len(), "removed book");
        Ok(removed)
    }

    async fn update_book(&self, isbn: &str, changes: &BookChanges) -> LibraryResult<BookDto> {
        let mut catalog = self.catalog.lock().await;
        let updated = BookDto::from(catalog.update_by_key(isbn, changes)?);
        self.persist(&catalog).await?;
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "books", isbn, &self.metadata(), &updated)?).await?;
        tracing::info!(isbn, "updated book");
        Ok(updated)
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.catalog.lock().await.find_by_key(isbn)
            .map(BookDto::from)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", isbn).as_str()))
    }

    async fn find_books_by_author_or_category(&self, text: &str) -> LibraryResult<Vec<BookDto>> {
        let res = self.catalog.lock().await.find_by_author_or_category(text);
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        Ok(self.catalog.lock().await.iter().map(BookDto::from).collect())
    }

    async fn list_books_reversed(&self) -> LibraryResult<Vec<BookDto>> {
        Ok(self.catalog.lock().await.iter().rev().map(BookDto::from).collect())
    }

    async fn count(&self) -> usize {
        self.catalog.lock().await.len()
    }
}
