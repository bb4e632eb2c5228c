//! Add book page

use super::{BookForm, Outcome};
use crate::client::{ApiClient, Route};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddBookPage {
    pub form: BookForm,
    pub error: Option<String>,
    pub loading: bool,
}

impl AddBookPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn submit(&mut self, api: &ApiClient) -> Outcome {
        self.error = None;
        if !self.form.validate() {
            return Outcome::Stay;
        }

        self.loading = true;
        let outcome = match api.create_book(&self.form.to_create()).await {
            Ok(book) => {
                tracing::debug!(id = %book.id, "Book added");
                Outcome::Navigate(Route::Books)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Outcome::Stay
            }
        };
        self.loading = false;
        outcome
    }
}
