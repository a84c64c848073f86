//! HTTP tests driving the full router.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, fixture::payload};
use tower::ServiceExt;

use crate::server::{router, state::AppState};


/// Router over a fresh in-memory database with every table created.
struct TestApp {
    db: DatabaseConnection,
    router: Router,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.unwrap();
        let router = router::app(AppState::new(db.clone(), Duration::days(7)));

        Self { db, router }
    }

    /// Sends a request and returns the status with the body parsed as JSON
    /// (`Value::Null` for an empty body).
    async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<&Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    /// Sends a raw body with an optional content type and returns only the status.
    async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        content_type: Option<&str>,
        body: &'static str,
    ) -> StatusCode {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }

        let request = builder.body(Body::from(body)).unwrap();
        let response = self.router.clone().oneshot(request).await.unwrap();

        response.status()
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    async fn post(&self, uri: &str, token: Option<&str>, body: &Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    async fn put(&self, uri: &str, token: Option<&str>, body: &Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, token, None).await
    }

    /// Signs up an account and returns `(token, user_id)`.
    async fn signup(&self, body: Value) -> (String, String) {
        let (status, body) = self.post("/api/auth/signup", None, &body).await;
        assert_eq!(status, StatusCode::OK, "signup failed: {}", body);

        (
            body["token"].as_str().unwrap().to_string(),
            body["_id"].as_str().unwrap().to_string(),
        )
    }

    /// Creates a profile for the token's user and returns its id.
    async fn create_profile(&self, token: &str) -> String {
        let (status, body) = self
            .post("/api/profiles", Some(token), &payload::profile())
            .await;
        assert_eq!(status, StatusCode::CREATED, "profile create failed: {}", body);

        body["_id"].as_str().unwrap().to_string()
    }
}
