use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::Response,
};

use crate::api::{bad_request, internal_error, not_found, success};
use crate::handler::AppState;
use crate::model::UpdateUserSettings;

pub async fn get_settings(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    match state.storage.get_user_settings(&user_id) {
        Ok(Some(settings)) => success(settings),
        Ok(None) => not_found("Settings not found"),
        Err(e) => {
            tracing::error!("Failed to get settings: {}", e);
            internal_error("Failed to load settings")
        }
    }
}

pub async fn update_settings(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: Result<Json<UpdateUserSettings>, JsonRejection>,
) -> Response {
    let update = match payload {
        Ok(Json(update)) => update,
        Err(e) => {
            tracing::info!("Rejected settings body: {}", e);
            return bad_request("Invalid settings data");
        }
    };
    if let Err(reason) = update.validate() {
        tracing::info!("Rejected settings: {}", reason);
        return bad_request("Invalid settings data");
    }

    match state.storage.update_user_settings(&user_id, update) {
        Ok(settings) => success(settings),
        Err(e) => {
            tracing::error!("Failed to update settings: {}", e);
            internal_error("Failed to update settings")
        }
    }
}
