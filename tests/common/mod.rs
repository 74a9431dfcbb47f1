#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wishlist_api::{config::AppConfig, db, handlers::AppServices, AppState};

/// Helper harness for spinning up an application state backed by an
/// in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        // A single connection keeps the in-memory database alive and shared.
        let mut cfg = AppConfig::new("sqlite::memory:", "127.0.0.1", 18080, "test");
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let db_arc = Arc::new(pool);
        let services = AppServices::new(db_arc.clone());
        let state = AppState {
            db: db_arc,
            config: cfg,
            services,
        };

        let router = wishlist_api::api_routes().with_state(state.clone());
        Self { router, state }
    }

    /// Send a request against the router; JSON bodies get the JSON content type.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Send a request with explicit headers, bypassing the JSON defaults.
    pub async fn request_with_headers(
        &self,
        method: Method,
        uri: &str,
        body: Vec<u8>,
        headers: &[(&str, &str)],
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let request = builder
            .body(Body::from(body))
            .expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Create a wishlist and return its serialized body.
    pub async fn create_wishlist(&self, name: &str, userid: &str, date_created: &str) -> Value {
        let response = self
            .request(
                Method::POST,
                "/wishlists",
                Some(json!({
                    "name": name,
                    "userid": userid,
                    "date_created": date_created,
                    "items": [],
                })),
            )
            .await;
        assert_eq!(response.status(), 201, "wishlist creation failed");
        read_json(response).await
    }

    /// Create an item in a wishlist and return its serialized body.
    pub async fn create_item(&self, wishlist_id: i64, name: &str, price: f64) -> Value {
        let response = self
            .request(
                Method::POST,
                &format!("/wishlists/{wishlist_id}/items"),
                Some(json!({
                    "name": name,
                    "description": "test item",
                    "price": price,
                })),
            )
            .await;
        assert_eq!(response.status(), 201, "item creation failed");
        read_json(response).await
    }
}

/// Collects a response body into JSON.
pub async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not valid json")
}
