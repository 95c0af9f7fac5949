pub mod models;

use shelf_http::{resource_path, ApiError, ApiRequest};

use super::Api;
use crate::utils;
use models::{NewReadingList, ReadingList, ReadingListPatch};

const MODULE: &str = "reading_lists";

impl Api {
    /// `GET /reading-lists`
    pub async fn list_reading_lists(&self) -> Result<Vec<ReadingList>, ApiError> {
        match self
            .fetch(ApiRequest::get("/reading-lists"), &["readingLists"])
            .await
        {
            Ok(lists) => Ok(lists),
            Err(err) => {
                self.recover(MODULE, "list", err).await?;
                Ok(self.store.reading_lists().await)
            }
        }
    }

    /// `POST /reading-lists`
    pub async fn create_reading_list(
        &self,
        input: NewReadingList,
    ) -> Result<ReadingList, ApiError> {
        let request = ApiRequest::post("/reading-lists", serde_json::to_value(&input)?);
        match self.fetch(request, &["readingList"]).await {
            Ok(list) => Ok(list),
            Err(err) => {
                self.recover(MODULE, "create", err).await?;
                let list = ReadingList::from_new(utils::fresh_id(), input, utils::now());
                Ok(self.store.insert_reading_list(list).await)
            }
        }
    }

    /// `PUT /reading-lists/{id}` with only the changed fields.
    pub async fn update_reading_list(
        &self,
        id: &str,
        patch: ReadingListPatch,
    ) -> Result<ReadingList, ApiError> {
        let request = ApiRequest::put(
            resource_path(&["reading-lists", id]),
            serde_json::to_value(&patch)?,
        );
        match self.fetch(request, &["readingList"]).await {
            Ok(list) => Ok(list),
            Err(err) => {
                self.recover(MODULE, "update", err).await?;
                self.store
                    .update_reading_list(id, &patch, utils::now())
                    .await
                    .ok_or_else(|| ApiError::not_found("reading list", id))
            }
        }
    }

    /// `DELETE /reading-lists/{id}?userId={user_id}`
    pub async fn delete_reading_list(&self, id: &str, user_id: &str) -> Result<(), ApiError> {
        let request = ApiRequest::delete(resource_path(&["reading-lists", id]))
            .with_query("userId", user_id);
        match self.execute(request).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.recover(MODULE, "delete", err).await?;
                if self.store.remove_reading_list(id, user_id).await {
                    Ok(())
                } else {
                    Err(ApiError::not_found("reading list", id))
                }
            }
        }
    }
}
