//! Book catalog service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

fn book_not_found() -> AppError {
    AppError::NotFound("Book not found".to_string())
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    pub async fn get_book(&self, id: Uuid) -> AppResult<Book> {
        self.repository
            .books
            .get_by_id(id)
            .await?
            .ok_or_else(book_not_found)
    }

    pub async fn create_book(&self, data: CreateBook) -> AppResult<Book> {
        data.validate()?;
        let book = self.repository.books.create(&data).await?;
        tracing::info!(book_id = %book.id, title = %book.title, "Book created");
        Ok(book)
    }

    /// Apply a partial update. Concurrent updates are last-write-wins.
    pub async fn update_book(&self, id: Uuid, patch: UpdateBook) -> AppResult<Book> {
        patch.validate()?;
        let book = self
            .repository
            .books
            .update(id, &patch)
            .await?
            .ok_or_else(book_not_found)?;
        tracing::info!(book_id = %book.id, "Book updated");
        Ok(book)
    }

    /// Delete a book, returning the removed record
    pub async fn delete_book(&self, id: Uuid) -> AppResult<Book> {
        let book = self
            .repository
            .books
            .delete(id)
            .await?
            .ok_or_else(book_not_found)?;
        tracing::info!(book_id = %book.id, "Book deleted");
        Ok(book)
    }
}
