use serde::{Deserialize, Serialize};

/// A suggested book with the reason it was picked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub book_id: String,
    pub reason: String,
    /// 0.0 to 1.0
    pub confidence: f32,
}
