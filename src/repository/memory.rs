//! In-process store for both collections

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BookStore, UserStore};
use crate::{
    error::{AppError, AppResult},
    models::{Book, CreateBook, NewUser, UpdateBook, User},
};

/// Memory-backed repository. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    users: Arc<RwLock<IndexMap<Uuid, User>>>,
    books: Arc<RwLock<IndexMap<Uuid, Book>>>,
}

fn same_email(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[async_trait]
impl UserStore for MemoryRepository {
    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| same_email(&u.email, email))
            .cloned())
    }

    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .any(|u| same_email(&u.email, email)))
    }

    async fn create(&self, user: &NewUser) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| same_email(&u.email, &user.email)) {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }
        let created = User {
            id: Uuid::new_v4(),
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
        };
        users.insert(created.id, created.clone());
        Ok(created)
    }
}

#[async_trait]
impl BookStore for MemoryRepository {
    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        Ok(self.books.read().await.get(&id).cloned())
    }

    async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let book = Book::from_create(Uuid::new_v4(), data, Utc::now());
        self.books.write().await.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: Uuid, patch: &UpdateBook) -> AppResult<Option<Book>> {
        let mut books = self.books.write().await;
        Ok(books.get_mut(&id).map(|book| {
            book.apply(patch);
            book.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<Book>> {
        Ok(self.books.write().await.shift_remove(&id))
    }
}
