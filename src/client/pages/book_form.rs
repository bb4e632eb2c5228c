//! Form state shared by the add and edit pages

use async_graphql::MaybeUndefined;
use chrono::{Datelike, Utc};

use super::FieldErrors;
use crate::models::{Book, CreateBook, UpdateBook};

pub const GENRES: &[&str] = &[
    "Fiction",
    "Non-Fiction",
    "Mystery",
    "Romance",
    "Science Fiction",
    "Fantasy",
    "Biography",
    "History",
    "Self-Help",
    "Business",
    "Technology",
    "Health",
    "Travel",
    "Children",
    "Young Adult",
    "Poetry",
    "Drama",
    "Comedy",
    "Horror",
    "Thriller",
    "Dystopian",
];

pub const LANGUAGES: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Italian",
    "Portuguese",
    "Japanese",
    "Chinese",
    "Korean",
    "Russian",
    "Arabic",
];

/// Earliest accepted publication year
pub const MIN_YEAR: i32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BookField {
    Title,
    Author,
    Year,
    Genre,
    Image,
    Description,
    Language,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub image: String,
    pub description: String,
    pub language: String,
    pub errors: FieldErrors<BookField>,
}

impl Default for BookForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            year: String::new(),
            genre: String::new(),
            image: String::new(),
            description: String::new(),
            language: "English".to_string(),
            errors: FieldErrors::new(),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn nullable<T>(value: Option<T>) -> MaybeUndefined<T> {
    value.map_or(MaybeUndefined::Null, MaybeUndefined::Value)
}

impl BookForm {
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone().unwrap_or_default(),
            year: book.year.map(|y| y.to_string()).unwrap_or_default(),
            genre: book.genre.clone().unwrap_or_default(),
            image: book.image.clone().unwrap_or_default(),
            description: book.description.clone().unwrap_or_default(),
            language: book.language.clone().unwrap_or_default(),
            errors: FieldErrors::new(),
        }
    }

    /// Change a field; its pending error is cleared
    pub fn set(&mut self, field: BookField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BookField::Title => self.title = value,
            BookField::Author => self.author = value,
            BookField::Year => self.year = value,
            BookField::Genre => self.genre = value,
            BookField::Image => self.image = value,
            BookField::Description => self.description = value,
            BookField::Language => self.language = value,
        }
        self.errors.remove(&field);
    }

    pub fn validate(&mut self) -> bool {
        self.validate_for_year(Utc::now().year())
    }

    /// Required fields plus `MIN_YEAR..=current_year` for the year
    pub fn validate_for_year(&mut self, current_year: i32) -> bool {
        let mut errors = FieldErrors::new();

        if self.title.trim().is_empty() {
            errors.insert(BookField::Title, "Title is required".to_string());
        }
        if self.author.trim().is_empty() {
            errors.insert(BookField::Author, "Author is required".to_string());
        }
        if self.genre.trim().is_empty() {
            errors.insert(BookField::Genre, "Genre is required".to_string());
        }
        if self.year.trim().is_empty() {
            errors.insert(BookField::Year, "Year is required".to_string());
        } else {
            match self.year.trim().parse::<i32>() {
                Ok(year) if (MIN_YEAR..=current_year).contains(&year) => {}
                _ => {
                    errors.insert(BookField::Year, "Please enter a valid year".to_string());
                }
            }
        }
        if self.language.trim().is_empty() {
            errors.insert(BookField::Language, "Language is required".to_string());
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    fn year_value(&self) -> Option<i32> {
        self.year.trim().parse().ok()
    }

    pub fn to_create(&self) -> CreateBook {
        CreateBook {
            title: self.title.trim().to_string(),
            author: optional(&self.author),
            year: self.year_value(),
            genre: optional(&self.genre),
            image: optional(&self.image),
            description: optional(&self.description),
            language: optional(&self.language),
        }
    }

    /// Patch carrying the whole form; a blank optional field is sent as
    /// `null` and clears the stored value
    pub fn to_update(&self) -> UpdateBook {
        UpdateBook {
            title: optional(&self.title),
            author: nullable(optional(&self.author)),
            year: nullable(self.year_value()),
            genre: nullable(optional(&self.genre)),
            image: nullable(optional(&self.image)),
            description: nullable(optional(&self.description)),
            language: nullable(optional(&self.language)),
        }
    }
}
