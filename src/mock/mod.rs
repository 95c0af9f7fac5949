//! Session-scoped fallback data.
//!
//! A [`MockStore`] starts as a copy of the static seed collections. Writes that
//! fall back to mock data are applied here, so a session that lost its backend
//! still sees its own creates and edits on the next read.

pub mod seed;

use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::modules::books::models::{Book, BookPatch};
use crate::modules::reading_lists::models::{ReadingList, ReadingListPatch};
use crate::modules::recommendations::models::Recommendation;
use crate::modules::reviews::models::Review;

#[derive(Debug, Default)]
pub struct MockStore {
    books: RwLock<Vec<Book>>,
    reading_lists: RwLock<Vec<ReadingList>>,
    reviews: RwLock<Vec<Review>>,
    recommendations: Vec<Recommendation>,
}

impl MockStore {
    /// A store holding a fresh copy of the sample data.
    pub fn seeded() -> Self {
        Self {
            books: RwLock::new(seed::BOOKS.clone()),
            reading_lists: RwLock::new(seed::READING_LISTS.clone()),
            reviews: RwLock::new(seed::REVIEWS.clone()),
            recommendations: seed::RECOMMENDATIONS.clone(),
        }
    }

    pub async fn books(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn find_book(&self, id: &str) -> Option<Book> {
        self.books.read().await.iter().find(|b| b.id == id).cloned()
    }

    pub async fn insert_book(&self, book: Book) -> Book {
        self.books.write().await.push(book.clone());
        book
    }

    pub async fn update_book(&self, id: &str, patch: &BookPatch) -> Option<Book> {
        let mut books = self.books.write().await;
        let book = books.iter_mut().find(|b| b.id == id)?;
        book.apply(patch);
        Some(book.clone())
    }

    /// Returns false when no book has this id.
    pub async fn remove_book(&self, id: &str) -> bool {
        let mut books = self.books.write().await;
        let before = books.len();
        books.retain(|b| b.id != id);
        books.len() != before
    }

    pub async fn reading_lists(&self) -> Vec<ReadingList> {
        self.reading_lists.read().await.clone()
    }

    pub async fn insert_reading_list(&self, list: ReadingList) -> ReadingList {
        self.reading_lists.write().await.push(list.clone());
        list
    }

    pub async fn update_reading_list(
        &self,
        id: &str,
        patch: &ReadingListPatch,
        now: OffsetDateTime,
    ) -> Option<ReadingList> {
        let mut lists = self.reading_lists.write().await;
        let list = lists.iter_mut().find(|l| l.id == id)?;
        list.apply(patch, now);
        Some(list.clone())
    }

    /// Removes the list only when both id and owner match.
    pub async fn remove_reading_list(&self, id: &str, user_id: &str) -> bool {
        let mut lists = self.reading_lists.write().await;
        let before = lists.len();
        lists.retain(|l| !(l.id == id && l.user_id == user_id));
        lists.len() != before
    }

    pub async fn reviews_for(&self, book_id: &str) -> Vec<Review> {
        self.reviews
            .read()
            .await
            .iter()
            .filter(|r| r.book_id == book_id)
            .cloned()
            .collect()
    }

    pub async fn insert_review(&self, review: Review) -> Review {
        self.reviews.write().await.push(review.clone());
        review
    }

    /// Sample recommendations, skipping books already on one of the user's lists.
    pub async fn recommendations_for(&self, user_id: &str) -> Vec<Recommendation> {
        let lists = self.reading_lists.read().await;
        self.recommendations
            .iter()
            .filter(|rec| {
                !lists
                    .iter()
                    .filter(|l| l.user_id == user_id)
                    .any(|l| l.book_ids.contains(&rec.book_id))
            })
            .cloned()
            .collect()
    }
}
