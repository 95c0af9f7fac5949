use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub book_id: String,
    pub user_id: String,
    /// 1 to 5 stars
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Review {
    pub fn from_new(id: String, input: NewReview, now: OffsetDateTime) -> Self {
        Self {
            id,
            book_id: input.book_id,
            user_id: input.user_id,
            rating: input.rating,
            comment: input.comment,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub book_id: String,
    pub user_id: String,
    pub rating: u8,
    pub comment: String,
}
