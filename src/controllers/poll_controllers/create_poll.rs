use axum::{extract::State, http::StatusCode, Json};

use crate::controllers::poll_controllers::models::{CreatePollRequest, PollResponse};
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub async fn create_poll(
    State(state): State<AppState>,
    Json(payload): Json<CreatePollRequest>,
) -> AppResult<(StatusCode, Json<PollResponse>)> {
    let question = payload.question.trim().to_string();
    if question.is_empty() {
        return Err(AppError::ValidationError(
            "Poll question must not be empty".to_string(),
        ));
    }

    let options = normalize_options(&payload.options);
    if options.len() < 2 {
        return Err(AppError::ValidationError(
            "Enter at least 2 options for the user to select from".to_string(),
        ));
    }

    let poll = state.store.insert(question, options).await?;

    Ok((StatusCode::CREATED, Json(poll.into())))
}

/// Trims every option and drops the ones left empty; the client submits
/// blank rows freely.
pub fn normalize_options(options: &[String]) -> Vec<String> {
    options
        .iter()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalize_options;

    #[test]
    fn trims_and_drops_empty_options() {
        let raw = vec![
            "  Red ".to_string(),
            "".to_string(),
            "   ".to_string(),
            "Blue".to_string(),
        ];
        assert_eq!(normalize_options(&raw), vec!["Red", "Blue"]);
    }

    #[test]
    fn whitespace_only_options_leave_too_few() {
        let raw = vec!["A".to_string(), "   ".to_string()];
        assert_eq!(normalize_options(&raw).len(), 1);
    }
}
