use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use crate::app::router;
use crate::models::Todo;
use crate::state::AppState;
use crate::store::memory::{FailingStore, InMemoryStore};

pub fn memory_app() -> (Router, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    (router(AppState::new(store.clone())), store)
}

pub fn failing_app(message: &str) -> Router {
    router(AppState::new(Arc::new(FailingStore::new(message))))
}

/// Drive one request through the router and collect the response body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    json_body: Option<serde_json::Value>,
) -> (StatusCode, Bytes) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match json_body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&value).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body)
}

pub async fn create_todo(app: &Router, body: serde_json::Value) -> Todo {
    let (status, bytes) = send(app, "POST", "/todos", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_slice(&bytes).unwrap()
}
