use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct FindBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// q is compared against author and category, ignoring case
#[derive(Debug, Deserialize)]
pub(crate) struct FindBooksCommandRequest {
    #[serde(default)]
    pub(crate) q: String,
}

impl FindBooksCommandRequest {
    pub fn new(q: &str) -> Self {
        Self {
            q: q.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct FindBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl FindBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<FindBooksCommandRequest, FindBooksCommandResponse> for FindBooksCommand {
    async fn execute(&self, req: FindBooksCommandRequest) -> Result<FindBooksCommandResponse, CommandError> {
        self.catalog_service.find_books_by_author_or_category(req.q.as_str())
            .await.map_err(CommandError::from).map(FindBooksCommandResponse::new)
    }
}
