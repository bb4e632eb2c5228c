//! Catalog list page

use uuid::Uuid;

use super::{Load, Outcome};
use crate::{
    client::{ApiClient, Route},
    models::Book,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BookListPage {
    pub books: Load<Vec<Book>>,
    pub search: String,
    /// Book awaiting delete confirmation
    pub pending_delete: Option<Uuid>,
    pub error: Option<String>,
}

impl Default for BookListPage {
    fn default() -> Self {
        Self {
            books: Load::Loading,
            search: String::new(),
            pending_delete: None,
            error: None,
        }
    }
}

fn matches(book: &Book, needle: &str) -> bool {
    let contains = |value: &str| value.to_lowercase().contains(needle);
    contains(&book.title)
        || book.author.as_deref().is_some_and(contains)
        || book.genre.as_deref().is_some_and(contains)
}

impl BookListPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, api: &ApiClient) {
        self.books = match api.get_books().await {
            Ok(books) => Load::Ready(books),
            Err(e) => Load::Failed(e.to_string()),
        };
    }

    /// Books matching the search box on title, author or genre, ignoring case
    pub fn visible(&self) -> Vec<&Book> {
        let Some(books) = self.books.ready() else {
            return Vec::new();
        };
        let needle = self.search.trim().to_lowercase();
        books
            .iter()
            .filter(|book| needle.is_empty() || matches(book, &needle))
            .collect()
    }

    pub fn request_delete(&mut self, id: Uuid) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the book awaiting confirmation, then reload the list
    pub async fn confirm_delete(&mut self, api: &ApiClient) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        self.error = None;
        match api.delete_book(id).await {
            Ok(_) => self.load(api).await,
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn view(&self, id: Uuid) -> Outcome {
        Outcome::Navigate(Route::ViewBook(id))
    }

    pub fn edit(&self, id: Uuid) -> Outcome {
        Outcome::Navigate(Route::EditBook(id))
    }

    pub fn add(&self) -> Outcome {
        Outcome::Navigate(Route::AddBook)
    }
}
