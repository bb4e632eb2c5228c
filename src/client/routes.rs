//! Route table and protected-route gate

use std::fmt;

use uuid::Uuid;

use super::AuthState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Home,
    Books,
    AddBook,
    EditBook(Uuid),
    ViewBook(Uuid),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["home"] => Route::Home,
            ["books"] => Route::Books,
            ["books", "add"] => Route::AddBook,
            ["books", "edit", id] => Uuid::parse_str(id).map_or(Route::NotFound, Route::EditBook),
            ["books", "view", id] => Uuid::parse_str(id).map_or(Route::NotFound, Route::ViewBook),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Home => "/home".to_string(),
            Route::Books => "/books".to_string(),
            Route::AddBook => "/books/add".to_string(),
            Route::EditBook(id) => format!("/books/edit/{}", id),
            Route::ViewBook(id) => format!("/books/view/{}", id),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Routes that need a signed-in user
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::AddBook | Route::EditBook(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// What the shell should show for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Render(Route),
    /// Session is being resolved; show a loading indicator
    Loading,
    Redirect(Route),
}

pub fn gate(route: Route, auth: &AuthState) -> Gate {
    if !route.is_protected() {
        return Gate::Render(route);
    }
    match auth {
        AuthState::Anonymous => Gate::Redirect(Route::Login),
        AuthState::Unknown => Gate::Loading,
        AuthState::Authenticated(_) => Gate::Render(route),
    }
}
