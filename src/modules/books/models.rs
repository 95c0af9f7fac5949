use serde::{Deserialize, Serialize};

/// A catalog entry as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier for the book
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub genre: String,
    /// Average rating on a 0-5 scale
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub published_year: i32,
    #[serde(default)]
    pub description: String,
    /// URL of the cover image
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub isbn: String,
}

impl Book {
    /// Build a record for an id the caller has already assigned.
    pub fn from_new(id: String, input: NewBook) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
            genre: input.genre,
            rating: input.rating,
            published_year: input.published_year,
            description: input.description,
            cover_image: input.cover_image,
            isbn: input.isbn,
        }
    }

    /// Overwrite the fields present in `patch`. The id never changes.
    pub fn apply(&mut self, patch: &BookPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(author) = &patch.author {
            self.author = author.clone();
        }
        if let Some(genre) = &patch.genre {
            self.genre = genre.clone();
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(year) = patch.published_year {
            self.published_year = year;
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(cover_image) = &patch.cover_image {
            self.cover_image = cover_image.clone();
        }
        if let Some(isbn) = &patch.isbn {
            self.isbn = isbn.clone();
        }
    }
}

/// Request model for creating a new book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub rating: f32,
    pub published_year: i32,
    pub description: String,
    pub cover_image: String,
    pub isbn: String,
}

/// Request model for updating a book; absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
}
