//! Repository layer for the `users` and `books` collections

pub mod books;
pub mod memory;
pub mod users;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Book, CreateBook, NewUser, UpdateBook, User},
};

/// Access to the `users` collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<User>>;

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Case-insensitive lookup
    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn email_exists(&self, email: &str) -> AppResult<bool>;

    /// Insert a user. Fails with `AppError::Conflict` if the email is taken.
    async fn create(&self, user: &NewUser) -> AppResult<User>;
}

/// Access to the `books` collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books in creation order
    async fn list(&self) -> AppResult<Vec<Book>>;

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Book>>;

    async fn create(&self, book: &CreateBook) -> AppResult<Book>;

    /// Returns the updated record, or `None` if no book has this id
    async fn update(&self, id: Uuid, patch: &UpdateBook) -> AppResult<Option<Book>>;

    /// Returns the removed record, or `None` if no book has this id
    async fn delete(&self, id: Uuid) -> AppResult<Option<Book>>;
}

/// Main repository struct holding both collections
#[derive(Clone)]
pub struct Repository {
    pool: Option<Pool<Postgres>>,
    pub users: Arc<dyn UserStore>,
    pub books: Arc<dyn BookStore>,
}

impl Repository {
    /// Create a repository backed by PostgreSQL
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: Arc::new(users::UsersRepository::new(pool.clone())),
            books: Arc::new(books::BooksRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Create a repository kept in process memory
    pub fn in_memory() -> Self {
        let store = memory::MemoryRepository::default();
        Self::from_stores(Arc::new(store.clone()), Arc::new(store))
    }

    /// Assemble a repository from arbitrary store implementations
    pub fn from_stores(users: Arc<dyn UserStore>, books: Arc<dyn BookStore>) -> Self {
        Self {
            pool: None,
            users,
            books,
        }
    }

    /// Check that the backing store is reachable
    pub async fn ping(&self) -> AppResult<()> {
        if let Some(ref pool) = self.pool {
            sqlx::query("SELECT 1").execute(pool).await?;
        }
        Ok(())
    }
}
