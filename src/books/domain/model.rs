use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is a single catalog record. The ISBN is its key and the serialized
// field names are the ones used by the persisted snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "ano")]
    pub year: String,
    pub isbn: String,
    #[serde(rename = "categoria")]
    pub category: String,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, year: &str, isbn: &str, category: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year: year.to_string(),
            isbn: isbn.to_string(),
            category: category.to_string(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
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

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {} | ISBN: {} | {}",
               self.title, self.author, self.year, self.isbn, self.category)
    }
}
