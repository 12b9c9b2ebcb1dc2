use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use crate::books::dto::{BookChanges, BookDto};
use crate::catalog::command::add_book_cmd::AddBookCommandRequest;
use crate::catalog::domain::CatalogService;
use crate::core::library::LibraryError;

const MENU: &str = "
--------------------------------------------
[1] Add book
[2] List books (forward)
[3] List books (reverse)
[4] Find book by ISBN
[5] Find books by author or category
[6] Update book
[7] Remove book
[0] Exit
--------------------------------------------
";

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum MenuOption {
    Add,
    ListForward,
    ListReverse,
    FindByIsbn,
    FindByAuthorOrCategory,
    Update,
    Remove,
    Exit,
    Invalid,
}

impl From<&str> for MenuOption {
    fn from(s: &str) -> Self {
        match s.trim() {
            "1" => MenuOption::Add,
            "2" => MenuOption::ListForward,
            "3" => MenuOption::ListReverse,
            "4" => MenuOption::FindByIsbn,
            "5" => MenuOption::FindByAuthorOrCategory,
            "6" => MenuOption::Update,
            "7" => MenuOption::Remove,
            "0" => MenuOption::Exit,
            _ => MenuOption::Invalid,
        }
    }
}

/// ConsoleAdapter drives the catalog from a line-oriented terminal session.
///
/// Every prompted field is read as one line; a missing line (end of input)
/// becomes an empty field, and end of input at the menu prompt exits. Catalog
/// errors are printed as plain messages, only I/O failures end the session.
pub(crate) struct ConsoleAdapter<R, W> {
    catalog: Arc<dyn CatalogService>,
    input: R,
    output: W,
}

impl<R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin> ConsoleAdapter<R, W> {
    pub(crate) fn new(catalog: Arc<dyn CatalogService>, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    pub(crate) fn into_output(self) -> W {
        self.output
    }

    pub(crate) async fn run(&mut self) -> io::Result<()> {
        loop {
            self.print(MENU).await?;
            let option = match self.prompt("Select an option: ").await? {
                Some(line) => MenuOption::from(line.as_str()),
                None => MenuOption::Exit,
            };
            match option {
                MenuOption::Add => self.add().await?,
                MenuOption::ListForward => self.list(false).await?,
                MenuOption::ListReverse => self.list(true).await?,
                MenuOption::FindByIsbn => self.find_by_isbn().await?,
                MenuOption::FindByAuthorOrCategory => self.find_by_author_or_category().await?,
                MenuOption::Update => self.update().await?,
                MenuOption::Remove => self.remove().await?,
                MenuOption::Exit => {
                    self.println("Exiting").await?;
                    return Ok(());
                }
                MenuOption::Invalid => self.println("Invalid option").await?,
            }
        }
    }

    async fn add(&mut self) -> io::Result<()> {
        let mut req = AddBookCommandRequest::new(&BookDto::new(
            self.field("Title: ").await?.as_str(),
            self.field("Author: ").await?.as_str(),
            self.field("Publication year: ").await?.as_str(),
            self.field("ISBN: ").await?.as_str(),
            self.field("Category: ").await?.as_str()));
        let position = self.field("Position [inicio/medio/final]: ").await?;
        if !position.is_empty() {
            let index = if position.eq_ignore_ascii_case("medio") {
                self.field("Index: ").await?.parse::<i64>().ok()
            } else {
                None
            };
            req = req.at(position.as_str(), index);
        }
        let res = match req.placement() {
            Ok(placement) => self.catalog.add_book(&req.build_book(), placement).await.map(|_| ()),
            Err(err) => Err(err),
        };
        self.report(res, "Book added").await
    }

    async fn list(&mut self, reversed: bool) -> io::Result<()> {
        let res = if reversed {
            self.catalog.list_books_reversed().await
        } else {
            self.catalog.list_books().await
        };
        match res {
            Ok(books) if books.is_empty() => self.println("Library is empty").await,
            Ok(books) => self.print_books(&books).await,
            Err(err) => self.report(Err(err), "").await,
        }
    }

    async fn find_by_isbn(&mut self) -> io::Result<()> {
        let isbn = self.field("ISBN to find: ").await?;
        match self.catalog.find_book_by_isbn(isbn.as_str()).await {
            Ok(book) => self.println(book.to_string().as_str()).await,
            Err(err) => self.report(Err(err), "").await,
        }
    }

    async fn find_by_author_or_category(&mut self) -> io::Result<()> {
        let text = self.field("Author or category: ").await?;
        match self.catalog.find_books_by_author_or_category(text.as_str()).await {
            Ok(books) if books.is_empty() => self.println("No books found").await,
            Ok(books) => self.print_books(&books).await,
            Err(err) => self.report(Err(err), "").await,
        }
    }

    async fn update(&mut self) -> io::Result<()> {
        let isbn = self.field("ISBN of the book to update: ").await?;
        let changes = BookChanges::new(
            self.field("New title: ").await?.as_str(),
            self.field("New author: ").await?.as_str(),
            self.field("New year: ").await?.as_str(),
            self.field("New category: ").await?.as_str());
        let res = self.catalog.update_book(isbn.as_str(), &changes).await.map(|_| ());
        self.report(res, "Book updated").await
    }

    async fn remove(&mut self) -> io::Result<()> {
        let isbn = self.field("ISBN of the book to remove: ").await?;
        let res = self.catalog.remove_book(isbn.as_str()).await.map(|_| ());
        self.report(res, "Book removed").await
    }

    async fn report(&mut self, res: Result<(), LibraryError>, success: &str) -> io::Result<()> {
        match res {
            Ok(_) => self.println(success).await,
            Err(LibraryError::NotFound { .. }) => self.println("Book not found").await,
            Err(LibraryError::DuplicateKey { .. }) => self.println("ISBN already exists").await,
            Err(err) => {
                tracing::warn!("console operation failed: {}", err);
                self.println(format!("Error: {}", err).as_str()).await
            }
        }
    }

    async fn print_books(&mut self, books: &[BookDto]) -> io::Result<()> {
        for book in books {
            self.println(book.to_string().as_str()).await?;
        }
        Ok(())
    }

    // None at end of input
    async fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.print(label).await?;
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn field(&mut self, label: &str) -> io::Result<String> {
        Ok(self.prompt(label).await?.unwrap_or_default())
    }

    async fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }

    async fn println(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }
}
