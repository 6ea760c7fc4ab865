use std::sync::Arc;

use axum::{Json, response::IntoResponse};
use tracing::info;

use crate::api::StatusResponse;
use crate::config::Search;
use crate::provider::ScriptureProvider;
use crate::storage::MemStorage;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<MemStorage>,
    pub provider: Arc<dyn ScriptureProvider>,
    pub search: Arc<Search>,
}

pub async fn healthcheck() -> impl IntoResponse {
    info!("got healthcheck request");
    Json(StatusResponse {
        status: "ok".to_string(),
    })
}
