//! Edit book page

use uuid::Uuid;

use super::{BookForm, Load, Outcome};
use crate::client::{ApiClient, Route};

#[derive(Debug, Clone, PartialEq)]
pub struct EditBookPage {
    pub id: Uuid,
    pub form: Load<BookForm>,
    pub error: Option<String>,
    pub saving: bool,
}

impl EditBookPage {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            form: Load::Loading,
            error: None,
            saving: false,
        }
    }

    /// Fetch the book and fill the form with its current values
    pub async fn load(&mut self, api: &ApiClient) {
        self.form = match api.get_book_by_id(self.id).await {
            Ok(book) => Load::Ready(BookForm::from_book(&book)),
            Err(e) => Load::Failed(e.to_string()),
        };
    }

    pub fn form_mut(&mut self) -> Option<&mut BookForm> {
        match &mut self.form {
            Load::Ready(form) => Some(form),
            _ => None,
        }
    }

    /// Save the changes and return to the book's detail page
    pub async fn submit(&mut self, api: &ApiClient) -> Outcome {
        self.error = None;
        let Load::Ready(form) = &mut self.form else {
            return Outcome::Stay;
        };
        if !form.validate() {
            return Outcome::Stay;
        }
        let patch = form.to_update();

        self.saving = true;
        let outcome = match api.update_book(self.id, &patch).await {
            Ok(_) => Outcome::Navigate(Route::ViewBook(self.id)),
            Err(e) => {
                self.error = Some(e.to_string());
                Outcome::Stay
            }
        };
        self.saving = false;
        outcome
    }

    pub fn cancel(&self) -> Outcome {
        Outcome::Navigate(Route::ViewBook(self.id))
    }
}
