//! Book detail page

use uuid::Uuid;

use super::{Load, Outcome};
use crate::{
    client::{ApiClient, Route},
    models::Book,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewBookPage {
    pub id: Uuid,
    pub book: Load<Book>,
    pub error: Option<String>,
}

impl ViewBookPage {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            book: Load::Loading,
            error: None,
        }
    }

    pub async fn load(&mut self, api: &ApiClient) {
        self.book = match api.get_book_by_id(self.id).await {
            Ok(book) => Load::Ready(book),
            Err(e) => Load::Failed(e.to_string()),
        };
    }

    pub fn edit(&self) -> Outcome {
        Outcome::Navigate(Route::EditBook(self.id))
    }

    pub fn back(&self) -> Outcome {
        Outcome::Navigate(Route::Books)
    }

    /// Delete the book and return to the catalog
    pub async fn delete(&mut self, api: &ApiClient) -> Outcome {
        self.error = None;
        match api.delete_book(self.id).await {
            Ok(_) => Outcome::Navigate(Route::Books),
            Err(e) => {
                self.error = Some(e.to_string());
                Outcome::Stay
            }
        }
    }
}
