//! Books repository for database operations

use async_graphql::MaybeUndefined;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::BookStore;
use crate::{
    error::AppResult,
    models::{Book, CreateBook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY enter_time, id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (id, title, author, year, genre, image, description, language)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(&data.author)
        .bind(data.year)
        .bind(&data.genre)
        .bind(&data.image)
        .bind(&data.description)
        .bind(&data.language)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, data: &UpdateBook) -> AppResult<Option<Book>> {
        let mut columns: Vec<&str> = Vec::new();

        macro_rules! add_field {
            ($present:expr, $name:expr) => {
                if $present {
                    columns.push($name);
                }
            };
        }

        add_field!(data.title.is_some(), "title");
        add_field!(!data.author.is_undefined(), "author");
        add_field!(!data.year.is_undefined(), "year");
        add_field!(!data.genre.is_undefined(), "genre");
        add_field!(!data.image.is_undefined(), "image");
        add_field!(!data.description.is_undefined(), "description");
        add_field!(!data.language.is_undefined(), "language");

        // Empty patch: report the current record unchanged
        if columns.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = update_query(&columns);
        let mut builder = sqlx::query_as::<_, Book>(&query).bind(id);

        if let Some(ref title) = data.title {
            builder = builder.bind(title);
        }

        // `null` binds as SQL NULL and clears the column
        macro_rules! bind_field {
            ($field:expr) => {
                if !$field.is_undefined() {
                    let value = match &$field {
                        MaybeUndefined::Value(v) => Some(v.clone()),
                        _ => None,
                    };
                    builder = builder.bind(value);
                }
            };
        }

        bind_field!(data.author);
        bind_field!(data.year);
        bind_field!(data.genre);
        bind_field!(data.image);
        bind_field!(data.description);
        bind_field!(data.language);

        let book = builder.fetch_optional(&self.pool).await?;
        Ok(book)
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("DELETE FROM books WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }
}

/// `UPDATE` statement for `columns`, bound from `$2` on (`$1` is the id)
fn update_query(columns: &[&str]) -> String {
    let sets: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{} = ${}", column, i + 2))
        .collect();
    format!("UPDATE books SET {} WHERE id = $1 RETURNING *", sets.join(", "))
}
