use axum::{
    extract::{Path, State},
    Json,
};
use mongodb::bson::oid::ObjectId;
use serde_json::{json, Value};

use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub async fn delete_poll(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<Value>> {
    // Syntactically invalid ids are a 400 here; the store treats them as
    // plain not-found.
    if ObjectId::parse_str(&poll_id).is_err() {
        return Err(AppError::BadRequest("Invalid poll ID format".to_string()));
    }

    state.store.delete_by_id(&poll_id).await?;

    Ok(Json(json!({ "message": "Poll deleted successfully" })))
}
