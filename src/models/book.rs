//! Book model

use async_graphql::{ComplexObject, InputObject, MaybeUndefined, SimpleObject, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Book {
    #[graphql(skip)]
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    /// Publication year
    pub year: Option<i32>,
    pub genre: Option<String>,
    /// Cover image URL
    pub image: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    /// When the record was created
    pub enter_time: DateTime<Utc>,
}

#[ComplexObject]
impl Book {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }
}

impl Book {
    /// Build a fresh record from a create request
    pub fn from_create(id: Uuid, data: &CreateBook, enter_time: DateTime<Utc>) -> Self {
        Self {
            id,
            title: data.title.clone(),
            author: data.author.clone(),
            year: data.year,
            genre: data.genre.clone(),
            image: data.image.clone(),
            description: data.description.clone(),
            language: data.language.clone(),
            enter_time,
        }
    }

    /// Apply the fields present in a patch; absent fields stay untouched and
    /// `null` clears an optional field
    pub fn apply(&mut self, patch: &UpdateBook) {
        if let Some(ref title) = patch.title {
            self.title = title.clone();
        }
        assign(&mut self.author, &patch.author);
        assign(&mut self.year, &patch.year);
        assign(&mut self.genre, &patch.genre);
        assign(&mut self.image, &patch.image);
        assign(&mut self.description, &patch.description);
        assign(&mut self.language, &patch.language);
    }
}

fn assign<T: Clone>(slot: &mut Option<T>, patch: &MaybeUndefined<T>) {
    match patch {
        MaybeUndefined::Undefined => {}
        MaybeUndefined::Null => *slot = None,
        MaybeUndefined::Value(value) => *slot = Some(value.clone()),
    }
}

/// Create book request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, InputObject)]
#[serde(rename_all = "camelCase")]
#[graphql(name = "CreateBookInput")]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
}

/// Update book request. The title can be replaced but not removed; the
/// other fields distinguish absent (kept) from `null` (cleared).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, InputObject)]
#[serde(rename_all = "camelCase", default)]
#[graphql(name = "UpdateBookInput")]
pub struct UpdateBook {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub author: MaybeUndefined<String>,
    #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub year: MaybeUndefined<i32>,
    #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub genre: MaybeUndefined<String>,
    #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub image: MaybeUndefined<String>,
    #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub description: MaybeUndefined<String>,
    #[serde(skip_serializing_if = "MaybeUndefined::is_undefined")]
    pub language: MaybeUndefined<String>,
}
