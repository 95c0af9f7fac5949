use shelf_http::ApiError;

use super::PageState;
use crate::modules::reading_lists::models::{NewReadingList, ReadingList, ReadingListPatch};
use crate::modules::Api;

/// The reading lists owned by one user.
pub struct ReadingListsPage {
    api: Api,
    user_id: String,
    pub state: PageState<Vec<ReadingList>>,
}

impl ReadingListsPage {
    pub fn new(api: Api, user_id: impl Into<String>) -> Self {
        Self {
            api,
            user_id: user_id.into(),
            state: PageState::default(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub async fn load(&mut self) {
        self.state.start();
        let result = self.api.list_reading_lists().await;
        if let Some(lists) = self.state.finish(result) {
            self.state.data = lists
                .into_iter()
                .filter(|list| list.user_id == self.user_id)
                .collect();
        }
    }

    pub fn find(&self, id: &str) -> Option<&ReadingList> {
        self.state.data.iter().find(|list| list.id == id)
    }

    pub async fn create(&mut self, name: &str, description: &str) -> Option<ReadingList> {
        let name = match validate_name(name) {
            Ok(name) => name,
            Err(err) => {
                self.state.reject(err);
                return None;
            }
        };

        let input = NewReadingList {
            user_id: self.user_id.clone(),
            name,
            description: description.trim().to_string(),
            book_ids: Vec::new(),
        };

        self.state.start();
        let result = self.api.create_reading_list(input).await;
        let list = self.state.finish(result)?;
        self.state.data.push(list.clone());
        Some(list)
    }

    pub async fn rename(&mut self, id: &str, name: &str) -> Option<ReadingList> {
        let name = match validate_name(name) {
            Ok(name) => name,
            Err(err) => {
                self.state.reject(err);
                return None;
            }
        };
        let patch = ReadingListPatch {
            name: Some(name),
            ..ReadingListPatch::default()
        };
        self.update(id, patch).await
    }

    /// Append a book unless the list already holds it.
    pub async fn add_book(&mut self, list_id: &str, book_id: &str) -> Option<ReadingList> {
        let Some(list) = self.find(list_id) else {
            self.state.reject(ApiError::not_found("reading list", list_id));
            return None;
        };
        if list.book_ids.iter().any(|id| id == book_id) {
            return Some(list.clone());
        }

        let mut book_ids = list.book_ids.clone();
        book_ids.push(book_id.to_string());
        self.update_books(list_id, book_ids).await
    }

    pub async fn remove_book(&mut self, list_id: &str, book_id: &str) -> Option<ReadingList> {
        let Some(list) = self.find(list_id) else {
            self.state.reject(ApiError::not_found("reading list", list_id));
            return None;
        };

        let book_ids: Vec<String> = list
            .book_ids
            .iter()
            .filter(|id| *id != book_id)
            .cloned()
            .collect();
        self.update_books(list_id, book_ids).await
    }

    pub async fn delete(&mut self, id: &str) -> bool {
        self.state.start();
        let result = self.api.delete_reading_list(id, &self.user_id).await;
        if self.state.finish(result).is_none() {
            return false;
        }
        self.state.data.retain(|list| list.id != id);
        true
    }

    async fn update_books(&mut self, list_id: &str, book_ids: Vec<String>) -> Option<ReadingList> {
        let patch = ReadingListPatch {
            book_ids: Some(book_ids),
            ..ReadingListPatch::default()
        };
        self.update(list_id, patch).await
    }

    async fn update(&mut self, id: &str, patch: ReadingListPatch) -> Option<ReadingList> {
        self.state.start();
        let result = self.api.update_reading_list(id, patch).await;
        let list = self.state.finish(result)?;
        if let Some(slot) = self.state.data.iter_mut().find(|l| l.id == list.id) {
            *slot = list.clone();
        }
        Some(list)
    }
}

/// Trimmed name, or a validation error when nothing is left.
fn validate_name(name: &str) -> Result<String, ApiError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::validation("name", "List name is required"));
    }
    Ok(name.to_string())
}
