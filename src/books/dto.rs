use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// BookDto is a data transfer object for Catalog service. It accepts both the
// persisted field names and their english aliases, missing fields become empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub(crate) struct BookDto {
    #[serde(rename = "titulo", alias = "title", default)]
    pub title: String,
    #[serde(rename = "autor", alias = "author", default)]
    pub author: String,
    #[serde(rename = "ano", alias = "year", default)]
    pub year: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(rename = "categoria", alias = "category", default)]
    pub category: String,
}

impl BookDto {
    pub fn new(title: &str, author: &str, year: &str, isbn: &str, category: &str) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            year: year.to_string(),
            isbn: isbn.to_string(),
            category: category.to_string(),
        }
    }

    // year and isbn must be non-empty ascii digits
    pub fn validate(&self) -> LibraryResult<()> {
        validate_digits("year", self.year.as_str())?;
        validate_digits("isbn", self.isbn.as_str())
    }
}

// BookChanges carries the mutable fields of a book, the isbn is never updated
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub(crate) struct BookChanges {
    #[serde(rename = "titulo", alias = "title", default)]
    pub title: String,
    #[serde(rename = "autor", alias = "author", default)]
    pub author: String,
    #[serde(rename = "ano", alias = "year", default)]
    pub year: String,
    #[serde(rename = "categoria", alias = "category", default)]
    pub category: String,
}

impl BookChanges {
    pub fn new(title: &str, author: &str, year: &str, category: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year: year.to_string(),
            category: category.to_string(),
        }
    }

    pub fn validate(&self) -> LibraryResult<()> {
        validate_digits("year", self.year.as_str())
    }

    pub fn apply_to(&self, book: &mut BookEntity) {
        book.title = self.title.to_string();
        book.author = self.author.to_string();
        book.year = self.year.to_string();
        book.category = self.category.to_string();
    }
}

pub(crate) fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

fn validate_digits(field: &str, value: &str) -> LibraryResult<()> {
    if is_digits(value) {
        Ok(())
    } else {
        Err(LibraryError::validation(
            format!("{} must contain only digits but was {:?}", field, value).as_str(),
            Some(field.to_string())))
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
    fn isbn(&self) -> &str {
        self.isbn.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn category(&self) -> &str {
        self.category.as_str()
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&BookEntity::from(self), f)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year.to_string(),
            isbn: other.isbn.to_string(),
            category: other.category.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year.to_string(),
            isbn: other.isbn.to_string(),
            category: other.category.to_string(),
        }
    }
}
