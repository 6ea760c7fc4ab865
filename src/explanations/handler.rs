use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::Response,
};

use crate::api::{bad_request, created, internal_error, not_found, success};
use crate::handler::AppState;
use crate::model::CreateVerseExplanation;

pub async fn get_explanation(
    State(state): State<AppState>,
    path: Result<Path<(String, u32, u32)>, PathRejection>,
) -> Response {
    let Ok(Path((book, chapter, verse))) = path else {
        return not_found("Explanation not found");
    };

    match state.storage.get_verse_explanation(&book, chapter, verse) {
        Ok(Some(explanation)) => success(explanation),
        Ok(None) => not_found("Explanation not found"),
        Err(e) => {
            tracing::error!("Failed to get explanation: {}", e);
            internal_error("Failed to load explanation")
        }
    }
}

pub async fn create_explanation(
    State(state): State<AppState>,
    payload: Result<Json<CreateVerseExplanation>, JsonRejection>,
) -> Response {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(e) => {
            tracing::info!("Rejected explanation body: {}", e);
            return bad_request("Invalid explanation data");
        }
    };
    if let Err(reason) = input.validate() {
        tracing::info!("Rejected explanation: {}", reason);
        return bad_request("Invalid explanation data");
    }

    match state.storage.create_verse_explanation(input) {
        Ok(explanation) => {
            tracing::info!(id = %explanation.id, "created explanation");
            created(explanation)
        }
        Err(e) => {
            tracing::error!("Failed to create explanation: {}", e);
            internal_error("Failed to create explanation")
        }
    }
}
