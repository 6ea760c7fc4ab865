use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::Response,
};
use serde::{Deserialize, Serialize};

use crate::api::{bad_request, created, internal_error, no_content, not_found, success};
use crate::handler::AppState;
use crate::model::{Bookmark, CreateBookmark};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkParams {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookmarkSaved {
    pub message: String,
    pub bookmark: Bookmark,
}

pub async fn list_bookmarks(
    State(state): State<AppState>,
    Query(params): Query<BookmarkParams>,
) -> Response {
    match state.storage.list_bookmarks(params.user_id.as_deref()) {
        Ok(bookmarks) => success(bookmarks),
        Err(e) => {
            tracing::error!("Failed to list bookmarks: {}", e);
            internal_error("Failed to load bookmarks")
        }
    }
}

pub async fn create_bookmark(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookmark>, JsonRejection>,
) -> Response {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(e) => {
            tracing::info!("Rejected bookmark body: {}", e);
            return bad_request("Invalid bookmark data");
        }
    };
    if let Err(reason) = input.validate() {
        tracing::info!("Rejected bookmark: {}", reason);
        return bad_request("Invalid bookmark data");
    }

    match state.storage.create_bookmark(input) {
        Ok(bookmark) => created(BookmarkSaved {
            message: "Bookmark saved".to_string(),
            bookmark,
        }),
        Err(e) => {
            tracing::error!("Failed to create bookmark: {}", e);
            internal_error("Failed to save bookmark")
        }
    }
}

pub async fn delete_bookmark(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.storage.delete_bookmark(&id) {
        Ok(true) => no_content(),
        Ok(false) => not_found("Bookmark not found"),
        Err(e) => {
            tracing::error!("Failed to delete bookmark: {}", e);
            internal_error("Failed to delete bookmark")
        }
    }
}
