//! Shelf application library
//!
//! Typed access to the book catalog backend with mock fallback, plus the
//! headless page controllers built on it.

pub mod mock;
pub mod modules;
pub mod pages;
pub mod utils;

/// Re-export commonly used types
pub use mock::MockStore;
pub use modules::books::models::{Book, BookPatch, NewBook};
pub use modules::reading_lists::models::{NewReadingList, ReadingList, ReadingListPatch};
pub use modules::recommendations::models::Recommendation;
pub use modules::reviews::models::{NewReview, Review};
pub use modules::Api;
