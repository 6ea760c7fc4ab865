use axum::http::Method;
use axum::{Router, routing::get};
use std::error::Error;
use tower_http::cors::{Any, CorsLayer};

pub mod api;
pub mod bible;
pub mod bookmarks;
pub mod config;
pub mod error;
pub mod explanations;
pub mod handler;
pub mod model;
pub mod provider;
pub mod settings;
pub mod storage;

use handler::{AppState, healthcheck};

/// Builds the full HTTP surface over `state`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route("/", get(healthcheck))
        .nest("/api/bible", bible::routes())
        .nest("/api/explanations", explanations::routes())
        .nest("/api/bookmarks", bookmarks::routes())
        .nest("/api/settings", settings::routes())
        .layer(cors)
        .with_state(state)
}

pub fn unpack_error(err: &(dyn Error)) -> String {
    let mut parts = Vec::new();
    parts.push(err.to_string());
    let mut current = err.source();
    while let Some(source) = current {
        parts.push(source.to_string());
        current = source.source();
    }
    parts.join(": ")
}
