use axum::{
    extract::{Path, State},
    Json,
};

use crate::controllers::poll_controllers::models::{CastVoteRequest, PollResponse};
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub async fn cast_vote(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<CastVoteRequest>,
) -> AppResult<Json<PollResponse>> {
    let option_index = usize::try_from(payload.option_index).map_err(|_| {
        AppError::OutOfRange(format!(
            "Option index {} is out of range for this poll",
            payload.option_index
        ))
    })?;

    let poll = state.store.increment_vote(&poll_id, option_index).await?;

    Ok(Json(poll.into()))
}
