use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A named, ordered collection of books owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReadingList {
    pub id: String,
    /// Owner of the list
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Book ids in reading order
    #[serde(default)]
    pub book_ids: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl ReadingList {
    pub fn from_new(id: String, input: NewReadingList, now: OffsetDateTime) -> Self {
        Self {
            id,
            user_id: input.user_id,
            name: input.name,
            description: input.description,
            book_ids: input.book_ids,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update and stamp `updated_at`.
    pub fn apply(&mut self, patch: &ReadingListPatch, now: OffsetDateTime) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(book_ids) = &patch.book_ids {
            self.book_ids = book_ids.clone();
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewReadingList {
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub book_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReadingListPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_ids: Option<Vec<String>>,
}
