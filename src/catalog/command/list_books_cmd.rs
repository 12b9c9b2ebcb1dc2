use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ListOrder {
    #[default]
    #[serde(alias = "normal")]
    Forward,
    #[serde(alias = "inverso")]
    Reverse,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListBooksCommandRequest {
    #[serde(default)]
    pub(crate) order: ListOrder,
}

impl ListBooksCommandRequest {
    pub fn new(order: ListOrder) -> Self {
        Self {
            order,
        }
    }
}

// serialized as a bare JSON array
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let books = match req.order {
            ListOrder::Forward => self.catalog_service.list_books().await,
            ListOrder::Reverse => self.catalog_service.list_books_reversed().await,
        };
        books.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}
