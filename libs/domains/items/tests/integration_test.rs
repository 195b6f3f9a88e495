//! Integration tests for the JSON-file backed Items domain
//!
//! Runs requests through the router against a document in a temp directory
//! and checks what ends up on disk.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_items::*;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

fn create_request(name: &str, date: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "name": name, "date": date }).to_string(),
        ))
        .unwrap()
}

fn read_document(path: &std::path::Path) -> Value {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_requests_are_persisted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");

    let repo = JsonFileItemRepository::open(&path).await.unwrap();
    let app = handlers::router(ItemService::new(repo));

    let response = app
        .clone()
        .oneshot(create_request("A", "01-01-2020"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(create_request("B", "02-02-2020"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        read_document(&path),
        json!({
            "items": [{ "id": 2, "name": "B", "date": "02-02-2020" }],
            "nextId": 3
        })
    );
}

#[tokio::test]
async fn test_rejected_request_does_not_touch_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");

    let repo = JsonFileItemRepository::open(&path).await.unwrap();
    let app = handlers::router(ItemService::new(repo));

    let response = app
        .oneshot(create_request("A", "32-01-2020"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(read_document(&path), json!({ "items": [], "nextId": 1 }));
}

#[tokio::test]
async fn test_counter_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");

    {
        let repo = JsonFileItemRepository::open(&path).await.unwrap();
        let service = ItemService::new(repo);
        service
            .create_item(ItemInput::new("A", "01-01-2020"))
            .await
            .unwrap();
        service.delete_item(1).await.unwrap();
    }

    let repo = JsonFileItemRepository::open(&path).await.unwrap();
    let service = ItemService::new(repo);
    let item = service
        .create_item(ItemInput::new("B", "02-02-2020"))
        .await
        .unwrap();

    assert_eq!(item.id, 2);
}
