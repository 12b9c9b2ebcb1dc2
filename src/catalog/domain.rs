pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookChanges, BookDto};
use crate::core::library::LibraryResult;
use crate::core::repository::Snapshot;

// Placement decides where a new book is linked into the catalog
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum Placement {
    Head,
    Tail,
    Position(i64),
}

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    // rehydrates the catalog once from the persisted snapshot
    async fn hydrate(&self) -> LibraryResult<Snapshot<BookEntity>>;
    async fn add_book(&self, book: &BookDto, placement: Placement) -> LibraryResult<BookDto>;
    async fn remove_book(&self, isbn: &str) -> LibraryResult<BookDto>;
    async fn update_book(&self, isbn: &str, changes: &BookChanges) -> LibraryResult<BookDto>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto>;
    async fn find_books_by_author_or_category(&self, text: &str) -> LibraryResult<Vec<BookDto>>;
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn list_books_reversed(&self) -> LibraryResult<Vec<BookDto>>;
    async fn count(&self) -> usize;
}
