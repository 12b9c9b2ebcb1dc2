use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookChanges, BookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    // taken from the path, an isbn in the body is ignored
    #[serde(skip)]
    pub isbn: String,
    #[serde(flatten)]
    pub changes: BookChanges,
}

impl UpdateBookCommandRequest {
    pub fn new(isbn: &str, changes: BookChanges) -> Self {
        Self {
            isbn: isbn.to_string(),
            changes,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub status: String,
    pub message: String,
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            status: "success".to_string(),
            message: "Book updated".to_string(),
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        req.changes.validate()?;
        self.catalog_service.update_book(req.isbn.as_str(), &req.changes)
            .await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
