use crate::books::repository::BookRepository;
use crate::books::repository::json_book_repository::JsonBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub(crate) fn create_book_repository(config: &Configuration) -> Box<dyn BookRepository> {
    match config.store {
        RepositoryStore::JsonFile => {
            Box::new(JsonBookRepository::new(config.data_file.as_path()))
        }
        RepositoryStore::Memory => {
            Box::new(MemoryBookRepository::new())
        }
    }
}
