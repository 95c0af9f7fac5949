use shelf_http::ApiError;

use super::PageState;
use crate::modules::books::models::Book;
use crate::modules::recommendations::models::Recommendation;
use crate::modules::reviews::models::{NewReview, Review};
use crate::modules::Api;

/// One book with its reviews and what to read next.
pub struct BookDetailPage {
    api: Api,
    book_id: String,
    user_id: String,
    pub book: PageState<Option<Book>>,
    pub reviews: PageState<Vec<Review>>,
    pub recommendations: PageState<Vec<Recommendation>>,
}

impl BookDetailPage {
    pub fn new(api: Api, book_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            api,
            book_id: book_id.into(),
            user_id: user_id.into(),
            book: PageState::default(),
            reviews: PageState::default(),
            recommendations: PageState::default(),
        }
    }

    /// Load the three sections concurrently; each settles independently.
    pub async fn load(&mut self) {
        self.book.start();
        self.reviews.start();
        self.recommendations.start();

        let (book, reviews, recommendations) = tokio::join!(
            self.api.get_book(&self.book_id),
            self.api.list_reviews(&self.book_id),
            self.api.recommendations(&self.user_id),
        );

        if let Some(book) = self.book.finish(book) {
            self.book.data = Some(book);
        }
        if let Some(reviews) = self.reviews.finish(reviews) {
            self.reviews.data = reviews;
        }
        if let Some(recommendations) = self.recommendations.finish(recommendations) {
            self.recommendations.data = recommendations;
        }
    }

    /// Mean of the loaded review ratings.
    pub fn average_rating(&self) -> Option<f32> {
        let reviews = &self.reviews.data;
        if reviews.is_empty() {
            return None;
        }
        let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(total as f32 / reviews.len() as f32)
    }

    /// Newest first, so a submitted review shows at the top.
    pub async fn submit_review(&mut self, rating: u8, comment: &str) -> Option<Review> {
        if let Err(err) = validate_review(rating, comment) {
            self.reviews.reject(err);
            return None;
        }

        let input = NewReview {
            book_id: self.book_id.clone(),
            user_id: self.user_id.clone(),
            rating,
            comment: comment.trim().to_string(),
        };

        self.reviews.start();
        let result = self.api.create_review(input).await;
        let review = self.reviews.finish(result)?;
        self.reviews.data.insert(0, review.clone());
        Some(review)
    }
}

fn validate_review(rating: u8, comment: &str) -> Result<(), ApiError> {
    if !(1..=5).contains(&rating) {
        return Err(ApiError::validation("rating", "Rating must be between 1 and 5"));
    }
    if comment.trim().is_empty() {
        return Err(ApiError::validation("comment", "Please write a comment"));
    }
    Ok(())
}
