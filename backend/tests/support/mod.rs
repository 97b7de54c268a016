//! Shared helpers for driving the HTTP router in integration tests.
#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use feedback_api::api::FeedbackId;
use feedback_api::db::repositories::LocalRepository;
use feedback_api::db::repository::FeedbackRepository;
use feedback_api::db::seed_feedbacks;
use feedback_api::http::{create_router, AppState};

/// A router over a fresh store, plus a handle on that store.
pub struct TestApp {
    pub router: Router,
    pub repo: LocalRepository,
}

impl TestApp {
    pub fn empty() -> Self {
        let repo = LocalRepository::new();
        let router = create_router(AppState::new(Arc::new(repo.clone())));
        Self { router, repo }
    }

    pub async fn seeded() -> Self {
        let app = Self::empty();
        seed_feedbacks(&app.repo).await.expect("seeding failed");
        app
    }

    /// Id of some stored record.
    pub async fn any_id(&self) -> FeedbackId {
        self.repo
            .list_feedbacks()
            .await
            .expect("listing failed")
            .first()
            .map(|f| f.id)
            .expect("store is empty")
    }

    /// Send a request and return the status with the body parsed as JSON
    /// (`Value::Null` for an empty body).
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request build failed");

        self.send_request(request).await
    }

    /// Send a raw body with the JSON content type.
    pub async fn send_raw(&self, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw.to_string()))
            .expect("request build failed");

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body read failed");

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, value)
    }
}
