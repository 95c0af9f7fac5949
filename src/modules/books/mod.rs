pub mod models;

use shelf_http::{resource_path, ApiError, ApiRequest};

use super::Api;
use crate::utils;
use models::{Book, BookPatch, NewBook};

const MODULE: &str = "books";

impl Api {
    /// `GET /books`
    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        match self.fetch(ApiRequest::get("/books"), &["books"]).await {
            Ok(books) => Ok(books),
            Err(err) => {
                self.recover(MODULE, "list", err).await?;
                Ok(self.store.books().await)
            }
        }
    }

    /// `GET /books/{id}`
    pub async fn get_book(&self, id: &str) -> Result<Book, ApiError> {
        let request = ApiRequest::get(resource_path(&["books", id]));
        match self.fetch(request, &["book"]).await {
            Ok(book) => Ok(book),
            Err(err) => {
                self.recover(MODULE, "get", err).await?;
                self.store
                    .find_book(id)
                    .await
                    .ok_or_else(|| ApiError::not_found("book", id))
            }
        }
    }

    /// `POST /books`
    pub async fn create_book(&self, input: NewBook) -> Result<Book, ApiError> {
        let request = ApiRequest::post("/books", serde_json::to_value(&input)?);
        match self.fetch(request, &["book"]).await {
            Ok(book) => Ok(book),
            Err(err) => {
                self.recover(MODULE, "create", err).await?;
                let book = Book::from_new(utils::fresh_id(), input);
                Ok(self.store.insert_book(book).await)
            }
        }
    }

    /// `PUT /books/{id}`
    pub async fn update_book(&self, id: &str, patch: BookPatch) -> Result<Book, ApiError> {
        let request = ApiRequest::put(
            resource_path(&["books", id]),
            serde_json::to_value(&patch)?,
        );
        match self.fetch(request, &["book"]).await {
            Ok(book) => Ok(book),
            Err(err) => {
                self.recover(MODULE, "update", err).await?;
                self.store
                    .update_book(id, &patch)
                    .await
                    .ok_or_else(|| ApiError::not_found("book", id))
            }
        }
    }

    /// `DELETE /books/{id}`
    pub async fn delete_book(&self, id: &str) -> Result<(), ApiError> {
        match self.execute(ApiRequest::delete(resource_path(&["books", id]))).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.recover(MODULE, "delete", err).await?;
                if self.store.remove_book(id).await {
                    Ok(())
                } else {
                    Err(ApiError::not_found("book", id))
                }
            }
        }
    }
}
