use axum::{Router, routing::get};

use super::handler;
use crate::handler::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(handler::list_books))
        .route("/search", get(handler::search))
        .route("/:book/:chapter", get(handler::get_chapter))
}
