//! Wishlist API Library
//!
//! This crate provides the core functionality for the Wishlist API
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod services;

use axum::{response::Json, routing::get, Router};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
}

/// Root index so clients hitting the bare URL get something useful.
async fn index() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "resources": {
            "wishlists": "/wishlists",
            "items": "/wishlists/{id}/items",
        },
    }))
}

/// Builds the full API router. Consumed by `main` and by the test harness.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .merge(handlers::health::health_routes())
        .nest(
            "/wishlists",
            handlers::wishlists::wishlists_routes().merge(handlers::items::items_routes()),
        )
}
