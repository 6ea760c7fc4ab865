use axum::{
    Router,
    routing::{get, post},
};

use super::handler;
use crate::handler::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_explanation))
        .route("/:book/:chapter/:verse", get(handler::get_explanation))
}
