use axum::{Router, routing::get};

use super::handler;
use crate::handler::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/:user_id",
        get(handler::get_settings).put(handler::update_settings),
    )
}
