use axum::{
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::Response,
};
use serde::{Deserialize, Serialize};

use super::{catalog, search};
use crate::api::{bad_request, internal_error, success};
use crate::handler::AppState;
use crate::model::SearchResult;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

pub async fn list_books() -> Response {
    success(catalog::books())
}

pub async fn get_chapter(
    State(state): State<AppState>,
    path: Result<Path<(String, u32)>, PathRejection>,
) -> Response {
    let (book, chapter) = match path {
        Ok(Path((book, chapter))) if chapter > 0 => (book, chapter),
        _ => return bad_request("Invalid chapter"),
    };

    match state.provider.fetch_chapter(&book, chapter).await {
        Ok(data) => success(data),
        Err(e) => {
            tracing::error!(
                book = %book,
                chapter,
                "Failed to fetch chapter: {}",
                crate::unpack_error(&e)
            );
            internal_error("Failed to load chapter")
        }
    }
}

pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Response {
    let params = match params {
        Ok(Query(params)) => params,
        Err(e) => {
            tracing::info!("Rejected search query: {}", e);
            return bad_request("Search query is required");
        }
    };
    let query = match params.q.as_deref() {
        Some(q) if !q.is_empty() => q,
        _ => return bad_request("Search query is required"),
    };

    let results = search::search_verses(state.provider.as_ref(), &state.search, query).await;
    tracing::info!(query = %query, matches = results.len(), "search complete");

    success(SearchResponse { results })
}
