pub mod json_book_repository;
pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::SnapshotRepository;

pub(crate) trait BookRepository: SnapshotRepository<BookEntity> {
}
