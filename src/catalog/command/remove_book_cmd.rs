use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) isbn: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {
    pub status: String,
    pub message: String,
    pub book: BookDto,
}

impl RemoveBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            status: "success".to_string(),
            message: "Book removed".to_string(),
            book,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.isbn.as_str()).await
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::books::dto::BookDto;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<std::sync::Arc<dyn CatalogService>> = AsyncOnce::new(async {
                factory::create_catalog_service(&Configuration::new("test")).await
            });
    }

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let svc = SUT_SVC.get().await.clone();
        let add_cmd = AddBookCommand::new(svc.clone());
        let remove_cmd = RemoveBookCommand::new(svc.clone());

        let book = BookDto::new("test book", "author", "2001", "9782000000017", "test");
        let _ = add_cmd.execute(AddBookCommandRequest::new(&book))
            .await.expect("should add book");
        let res = remove_cmd.execute(RemoveBookCommandRequest::new(book.isbn.as_str())).await.expect("should remove book");
        assert_eq!(book, res.book);
    }

    #[tokio::test]
    async fn test_should_report_not_found_on_second_removal() {
        let svc = SUT_SVC.get().await.clone();
        let add_cmd = AddBookCommand::new(svc.clone());
        let remove_cmd = RemoveBookCommand::new(svc.clone());

        let book = BookDto::new("test book", "author", "2001", "9782000000024", "test");
        let _ = add_cmd.execute(AddBookCommandRequest::new(&book)).await.expect("should add book");
        let _ = remove_cmd.execute(RemoveBookCommandRequest::new(book.isbn.as_str())).await.expect("should remove book");
        let res = remove_cmd.execute(RemoveBookCommandRequest::new(book.isbn.as_str())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
        assert!(svc.find_book_by_isbn(book.isbn.as_str()).await.is_err());
    }
}
