use shelf_http::ApiError;

use super::PageState;
use crate::modules::books::models::{Book, BookPatch, NewBook};
use crate::modules::Api;

/// What the catalog list is narrowed to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    /// Case-insensitive match against title or author.
    pub query: String,
    pub genre: Option<String>,
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        let query = self.query.trim().to_lowercase();
        let text_ok = query.is_empty()
            || book.title.to_lowercase().contains(&query)
            || book.author.to_lowercase().contains(&query);
        let genre_ok = self
            .genre
            .as_deref()
            .map_or(true, |genre| book.genre.eq_ignore_ascii_case(genre));
        text_ok && genre_ok
    }
}

pub struct CatalogPage {
    api: Api,
    pub state: PageState<Vec<Book>>,
    pub filter: BookFilter,
}

impl CatalogPage {
    pub fn new(api: Api) -> Self {
        Self {
            api,
            state: PageState::default(),
            filter: BookFilter::default(),
        }
    }

    pub async fn load(&mut self) {
        self.state.start();
        let result = self.api.list_books().await;
        if let Some(books) = self.state.finish(result) {
            self.state.data = books;
        }
    }

    /// Books passing the current filter, in load order.
    pub fn visible(&self) -> Vec<&Book> {
        self.state
            .data
            .iter()
            .filter(|book| self.filter.matches(book))
            .collect()
    }

    /// Distinct non-empty genres, sorted.
    pub fn genres(&self) -> Vec<&str> {
        let mut genres: Vec<&str> = self
            .state
            .data
            .iter()
            .map(|book| book.genre.as_str())
            .filter(|genre| !genre.is_empty())
            .collect();
        genres.sort_unstable();
        genres.dedup();
        genres
    }

    pub async fn create(&mut self, input: NewBook) -> Option<Book> {
        if let Err(err) = validate_new_book(&input) {
            self.state.reject(err);
            return None;
        }

        self.state.start();
        let result = self.api.create_book(input).await;
        let book = self.state.finish(result)?;
        self.state.data.push(book.clone());
        Some(book)
    }

    pub async fn update(&mut self, id: &str, patch: BookPatch) -> Option<Book> {
        if let Err(err) = validate_patch(&patch) {
            self.state.reject(err);
            return None;
        }

        self.state.start();
        let result = self.api.update_book(id, patch).await;
        let book = self.state.finish(result)?;
        if let Some(slot) = self.state.data.iter_mut().find(|b| b.id == book.id) {
            *slot = book.clone();
        }
        Some(book)
    }

    pub async fn delete(&mut self, id: &str) -> bool {
        self.state.start();
        let result = self.api.delete_book(id).await;
        if self.state.finish(result).is_none() {
            return false;
        }
        self.state.data.retain(|b| b.id != id);
        true
    }
}

fn validate_new_book(input: &NewBook) -> Result<(), ApiError> {
    if input.title.trim().is_empty() {
        return Err(ApiError::validation("title", "Title is required"));
    }
    if input.author.trim().is_empty() {
        return Err(ApiError::validation("author", "Author is required"));
    }
    validate_rating(input.rating)
}

fn validate_patch(patch: &BookPatch) -> Result<(), ApiError> {
    if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(ApiError::validation("title", "Title cannot be blank"));
    }
    if patch.author.as_deref().is_some_and(|a| a.trim().is_empty()) {
        return Err(ApiError::validation("author", "Author cannot be blank"));
    }
    patch.rating.map_or(Ok(()), validate_rating)
}

fn validate_rating(rating: f32) -> Result<(), ApiError> {
    if (0.0..=5.0).contains(&rating) {
        Ok(())
    } else {
        Err(ApiError::validation("rating", "Rating must be between 0 and 5"))
    }
}
