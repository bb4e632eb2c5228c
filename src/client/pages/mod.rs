//! Page controllers
//!
//! Each page owns its form and validation state, talks to the API through
//! [`ApiClient`](super::ApiClient), and reports where the shell should go
//! next. Failures are kept as an inline error with the form left populated.

pub mod add_book;
pub mod book_form;
pub mod book_list;
pub mod edit_book;
pub mod home;
pub mod login;
pub mod signup;
pub mod view_book;

use std::collections::BTreeMap;

use super::Route;

pub use add_book::AddBookPage;
pub use book_form::{BookField, BookForm};
pub use book_list::BookListPage;
pub use edit_book::EditBookPage;
pub use home::{HomePage, HomeStats};
pub use login::LoginPage;
pub use signup::{SignupField, SignupPage};
pub use view_book::ViewBookPage;

/// Result of a page action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Navigate(Route),
    Stay,
}

/// Data a page fetches on load
#[derive(Debug, Clone, PartialEq)]
pub enum Load<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Load<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Load::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Validation messages keyed by form field
pub type FieldErrors<F> = BTreeMap<F, String>;
