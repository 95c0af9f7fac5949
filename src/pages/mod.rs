//! Headless page controllers.
//!
//! A page keeps the `{loading, error, data}` triple a view renders and turns
//! user intents into access-layer calls. Input is validated here, before any
//! request is made.

pub mod book_detail;
pub mod catalog;
pub mod reading_lists;

use shelf_http::ApiError;

pub use book_detail::BookDetailPage;
pub use catalog::{BookFilter, CatalogPage};
pub use reading_lists::ReadingListsPage;

/// Transient UI state owned by one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState<T> {
    pub loading: bool,
    pub error: Option<String>,
    pub data: T,
}

impl<T> PageState<T> {
    pub fn new(data: T) -> Self {
        Self {
            loading: false,
            error: None,
            data,
        }
    }

    /// Mark a request in flight and clear the previous error.
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Settle the in-flight request. Errors become the page's message.
    pub fn finish<R>(&mut self, result: Result<R, ApiError>) -> Option<R> {
        self.loading = false;
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.reject(err);
                None
            }
        }
    }

    /// Record an error without a request having been made.
    pub fn reject(&mut self, err: ApiError) {
        tracing::info!(error_code = err.code(), error = %err, "page action failed");
        self.error = Some(err.user_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_records_user_message() {
        let mut state = PageState::new(Vec::<u8>::new());
        state.start();
        assert!(state.loading);

        let out: Option<()> = state.finish(Err(ApiError::not_found("book", "9")));
        assert!(out.is_none());
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("book '9' does not exist"));

        state.start();
        assert!(state.error.is_none());
        assert_eq!(state.finish(Ok(7)), Some(7));
    }
}
