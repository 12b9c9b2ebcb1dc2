use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::{CatalogService, Placement};
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    #[serde(rename = "titulo", alias = "title", default)]
    pub(crate) title: String,
    #[serde(rename = "autor", alias = "author", default)]
    pub(crate) author: String,
    #[serde(rename = "ano", alias = "year", default)]
    pub(crate) year: String,
    #[serde(default)]
    pub(crate) isbn: String,
    #[serde(rename = "categoria", alias = "category", default)]
    pub(crate) category: String,
    // inicio, medio or final; final when absent
    #[serde(default)]
    pub(crate) position: Option<String>,
    // zero-based, only read for medio
    #[serde(default)]
    pub(crate) index: Option<i64>,
}

impl AddBookCommandRequest {
    pub fn new(book: &BookDto) -> Self {
        Self {
            title: book.title.to_string(),
            author: book.author.to_string(),
            year: book.year.to_string(),
            isbn: book.isbn.to_string(),
            category: book.category.to_string(),
            position: None,
            index: None,
        }
    }

    pub fn at(mut self, position: &str, index: Option<i64>) -> Self {
        self.position = Some(position.to_string());
        self.index = index;
        self
    }

    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.title.as_str(), self.author.as_str(), self.year.as_str(),
                     self.isbn.as_str(), self.category.as_str())
    }

    pub fn placement(&self) -> LibraryResult<Placement> {
        match self.position.as_deref().map(str::to_lowercase).as_deref() {
            None | Some("final") | Some("tail") => Ok(Placement::Tail),
            Some("inicio") | Some("head") => Ok(Placement::Head),
            Some("medio") | Some("middle") => {
                self.index.map(Placement::Position).ok_or_else(|| LibraryError::validation(
                    "index is required when position is medio", Some("index".to_string())))
            }
            Some(other) => Err(LibraryError::validation(
                format!("unknown position {:?}, expected inicio, medio or final", other).as_str(),
                Some("position".to_string()))),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub status: String,
    pub message: String,
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            status: "success".to_string(),
            message: "Book added".to_string(),
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        book.validate()?;
        let placement = req.placement()?;
        self.catalog_service.add_book(&book, placement).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
