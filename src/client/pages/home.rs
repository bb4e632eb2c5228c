//! Home dashboard

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use super::{Load, Outcome};
use crate::{
    client::{ApiClient, Route},
    models::{Book, User},
};

/// Books entered within this many days count as recent
pub const RECENT_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeStats {
    pub total_books: usize,
    pub authors: usize,
    pub genres: usize,
    pub recent_additions: usize,
    pub active_users: usize,
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> usize {
    values
        .flatten()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

impl HomeStats {
    pub fn compute(books: &[Book], users: &[User], now: DateTime<Utc>) -> Self {
        let since = now - Duration::days(RECENT_DAYS);
        Self {
            total_books: books.len(),
            authors: distinct(books.iter().map(|b| b.author.as_deref())),
            genres: distinct(books.iter().map(|b| b.genre.as_deref())),
            recent_additions: books.iter().filter(|b| b.enter_time >= since).count(),
            active_users: users.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomePage {
    pub stats: Load<HomeStats>,
}

impl Default for HomePage {
    fn default() -> Self {
        Self {
            stats: Load::Loading,
        }
    }
}

impl HomePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch books and users together; either failure fails the dashboard
    pub async fn load(&mut self, api: &ApiClient) {
        let (books, users) = tokio::join!(api.get_books(), api.get_users());
        self.stats = match (books, users) {
            (Ok(books), Ok(users)) => Load::Ready(HomeStats::compute(&books, &users, Utc::now())),
            (Err(e), _) | (_, Err(e)) => Load::Failed(e.to_string()),
        };
    }

    pub fn browse(&self) -> Outcome {
        Outcome::Navigate(Route::Books)
    }

    pub fn add(&self) -> Outcome {
        Outcome::Navigate(Route::AddBook)
    }
}
