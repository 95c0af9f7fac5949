pub mod models;

use shelf_http::ApiError;

use super::Api;
use crate::utils;
use models::Recommendation;

impl Api {
    /// Recommendations have no backend endpoint yet; they always come from
    /// mock data after the configured delay.
    pub async fn recommendations(&self, user_id: &str) -> Result<Vec<Recommendation>, ApiError> {
        self.mock_delay().await;
        let recommendations = self.store.recommendations_for(user_id).await;
        tracing::debug!(
            prefix = %utils::log_prefix("recommendations"),
            user_id,
            count = recommendations.len(),
            "served synthetic recommendations"
        );
        Ok(recommendations)
    }
}
