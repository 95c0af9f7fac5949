pub mod models;

use shelf_http::{resource_path, ApiError, ApiRequest};

use super::Api;
use crate::utils;
use models::{NewReview, Review};

const MODULE: &str = "reviews";

impl Api {
    /// `GET /books/{book_id}/reviews`
    pub async fn list_reviews(&self, book_id: &str) -> Result<Vec<Review>, ApiError> {
        let request = ApiRequest::get(resource_path(&["books", book_id, "reviews"]));
        match self.fetch(request, &["reviews"]).await {
            Ok(reviews) => Ok(reviews),
            Err(err) => {
                self.recover(MODULE, "list", err).await?;
                Ok(self.store.reviews_for(book_id).await)
            }
        }
    }

    /// `POST /reviews`
    pub async fn create_review(&self, input: NewReview) -> Result<Review, ApiError> {
        let request = ApiRequest::post("/reviews", serde_json::to_value(&input)?);
        match self.fetch(request, &["review"]).await {
            Ok(review) => Ok(review),
            Err(err) => {
                self.recover(MODULE, "create", err).await?;
                let review = Review::from_new(utils::fresh_id(), input, utils::now());
                Ok(self.store.insert_review(review).await)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::testing::{self, ScriptedTransport};
    use serde_json::json;

    #[tokio::test]
    async fn list_reviews_hits_nested_path() {
        let body = json!([{
            "id": "r1",
            "bookId": "4",
            "userId": "user-3",
            "rating": 3,
            "comment": "Fine.",
            "createdAt": "2024-05-01T00:00:00Z"
        }]);
        let transport = ScriptedTransport::new().respond(200, body.to_string());
        let api = testing::api(&transport);

        let reviews = api.list_reviews("4").await.unwrap();
        assert_eq!(reviews[0].rating, 3);
        assert_eq!(transport.requests()[0].path, "/books/4/reviews");
    }

    #[tokio::test]
    async fn list_reviews_encodes_book_id() {
        let transport = ScriptedTransport::new().respond(500, "");
        let api = testing::api(&transport);

        let reviews = api.list_reviews("1/reviews?all=true").await.unwrap();
        assert!(reviews.is_empty());
        assert_eq!(
            transport.requests()[0].path,
            "/books/1%2Freviews%3Fall%3Dtrue/reviews"
        );
    }

    #[tokio::test]
    async fn list_reviews_offline_filters_by_book() {
        let api = testing::api(&ScriptedTransport::new());
        let reviews = api.list_reviews("1").await.unwrap();
        assert_eq!(reviews.len(), 2);
        assert!(reviews.iter().all(|r| r.book_id == "1"));
    }

    #[tokio::test]
    async fn created_review_is_listed_offline() {
        let api = testing::api(&ScriptedTransport::new());
        let review = api
            .create_review(NewReview {
                book_id: "4".into(),
                user_id: "user-1".into(),
                rating: 5,
                comment: "Witty.".into(),
            })
            .await
            .unwrap();

        let reviews = api.list_reviews("4").await.unwrap();
        assert_eq!(reviews, vec![review]);
    }

    #[tokio::test]
    async fn create_review_unwraps_gateway_wrapper() {
        let inner = json!({"success": true, "review": {
            "id": "srv-r",
            "bookId": "2",
            "userId": "user-1",
            "rating": 4,
            "comment": "Moving.",
            "createdAt": "2024-06-01T12:00:00Z"
        }});
        let body = json!({"statusCode": 201, "headers": {}, "body": inner.to_string()});
        let transport = ScriptedTransport::new().respond(200, body.to_string());
        let api = testing::api(&transport);

        let review = api
            .create_review(NewReview {
                book_id: "2".into(),
                user_id: "user-1".into(),
                rating: 4,
                comment: "Moving.".into(),
            })
            .await
            .unwrap();
        assert_eq!(review.id, "srv-r");
    }
}
