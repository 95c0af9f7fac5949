//! End-to-end tests: a fake backend served by axum on an ephemeral port,
//! driven through the reqwest transport.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde_json::{json, Value};

use shelf_app::pages::ReadingListsPage;
use shelf_app::{Api, MockStore, NewReadingList};
use shelf_http::{ApiError, TransportBuilder};
use shelf_kernel::ApiSettings;

async fn list_books(headers: HeaderMap) -> Json<Value> {
    let tag = if headers.contains_key("x-request-id") {
        "tagged"
    } else {
        "untagged"
    };
    let inner = json!([{
        "id": "srv-1",
        "title": "The Left Hand of Darkness",
        "author": "Ursula K. Le Guin",
        "genre": "Science Fiction",
        "rating": 4.3,
        "publishedYear": 1969,
        "description": "",
        "coverImage": "",
        "isbn": tag
    }]);
    Json(json!({
        "statusCode": 200,
        "headers": {"Content-Type": "application/json"},
        "body": inner.to_string(),
    }))
}

async fn get_book(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    if id == "srv-1" {
        Ok(Json(json!({
            "success": true,
            "book": {"id": "srv-1", "title": "The Left Hand of Darkness", "author": "Ursula K. Le Guin"}
        })))
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

/// Answers every delete with HTTP 200 and a gateway envelope saying 404.
async fn delete_book_gateway_missing(Path(_id): Path<String>) -> Json<Value> {
    Json(json!({
        "statusCode": 404,
        "headers": {},
        "body": r#"{"message":"not found"}"#,
    }))
}

async fn broken_lists() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn create_list(Json(input): Json<Value>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "readingList": {
                "id": "srv-rl-1",
                "userId": input["userId"],
                "name": input["name"],
                "description": input["description"],
                "bookIds": input["bookIds"],
                "createdAt": "2024-07-01T09:00:00Z",
                "updatedAt": "2024-07-01T09:00:00Z"
            }
        })),
    )
}

async fn delete_list(
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> StatusCode {
    match (id.as_str(), query.get("userId").map(String::as_str)) {
        ("srv-rl-1", Some("user-7")) => StatusCode::NO_CONTENT,
        _ => StatusCode::NOT_FOUND,
    }
}

async fn spawn_backend() -> String {
    let router = Router::new()
        .route("/api/books", get(list_books))
        .route(
            "/api/books/{id}",
            get(get_book).delete(delete_book_gateway_missing),
        )
        .route("/api/reading-lists", get(broken_lists).post(create_list))
        .route("/api/reading-lists/{id}", delete(delete_list));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://127.0.0.1:{}/api", port)
}

fn api_for(base_url: &str) -> Api {
    let settings = ApiSettings {
        base_url: base_url.to_string(),
        mock_delay_ms: 0,
        ..ApiSettings::default()
    };
    let transport = TransportBuilder::from_settings(&settings).build().unwrap();
    Api::new(Arc::new(transport), Arc::new(MockStore::seeded()), settings)
}

#[tokio::test]
async fn gateway_envelope_from_live_backend() {
    let api = api_for(&spawn_backend().await);

    let books = api.list_books().await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].published_year, 1969);
    assert_eq!(books[0].isbn, "tagged");
}

#[tokio::test]
async fn get_book_success_wrapper_and_not_found_fallback() {
    let api = api_for(&spawn_backend().await);

    let book = api.get_book("srv-1").await.unwrap();
    assert_eq!(book.author, "Ursula K. Le Guin");

    // 404 from the backend falls back to the sample catalog
    let sample = api.get_book("4").await.unwrap();
    assert_eq!(sample.title, "Pride and Prejudice");

    let err = api.get_book("nowhere").await.unwrap_err();
    assert_eq!(err, ApiError::not_found("book", "nowhere"));
}

#[tokio::test]
async fn server_error_on_list_serves_mock_lists() {
    let api = api_for(&spawn_backend().await);

    let mut page = ReadingListsPage::new(api, "user-1");
    page.load().await;
    assert!(page.state.error.is_none());
    assert_eq!(page.state.data.len(), 2);
}

#[tokio::test]
async fn create_and_delete_list_against_backend() {
    let api = api_for(&spawn_backend().await);

    let created = api
        .create_reading_list(NewReadingList {
            user_id: "user-7".into(),
            name: "Backend made".into(),
            description: String::new(),
            book_ids: vec!["srv-1".into()],
        })
        .await
        .unwrap();
    assert_eq!(created.id, "srv-rl-1");
    assert_eq!(created.name, "Backend made");

    api.delete_reading_list("srv-rl-1", "user-7").await.unwrap();

    // unknown to the backend and to the mock store
    let err = api
        .delete_reading_list("srv-rl-1", "user-8")
        .await
        .unwrap_err();
    assert_eq!(err.code(), "not_found");
}

#[tokio::test]
async fn gateway_not_found_on_delete_is_not_success() {
    let api = api_for(&spawn_backend().await);

    let err = api.delete_book("srv-absent").await.unwrap_err();
    assert_eq!(err, ApiError::not_found("book", "srv-absent"));

    // the backend refused, so the session copy is what gets deleted
    api.delete_book("1").await.unwrap();
    assert!(api.store().find_book("1").await.is_none());
}

#[tokio::test]
async fn id_cannot_smuggle_its_own_owner_query() {
    let api = api_for(&spawn_backend().await);

    let err = api
        .delete_reading_list("srv-rl-1?userId=user-7", "user-8")
        .await
        .unwrap_err();
    assert_eq!(err.code(), "not_found");

    let err = api
        .delete_reading_list("rl-1?userId=user-2", "user-1")
        .await
        .unwrap_err();
    assert_eq!(err.code(), "not_found");
    assert!(api
        .store()
        .reading_lists()
        .await
        .iter()
        .any(|l| l.id == "rl-1"));
}

#[tokio::test]
async fn fallback_disabled_reports_server_error() {
    let base_url = spawn_backend().await;
    let settings = ApiSettings {
        base_url,
        fallback_enabled: false,
        mock_delay_ms: 0,
        ..ApiSettings::default()
    };
    let api = Api::from_settings(&settings).unwrap();

    let err = api.list_reading_lists().await.unwrap_err();
    assert_eq!(err, ApiError::status(500));
}
