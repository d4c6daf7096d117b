use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::poll_models::{Poll, PollOption};

#[derive(Debug, Deserialize)]
pub struct CreatePollRequest {
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteRequest {
    /// Position of the chosen option. Signed so a negative index reaches
    /// the out-of-range check instead of a body-rejection error.
    pub option_index: i64,
}

/// Wire shape of a poll: `{ id, question, options: [{ id, text, votes }],
/// createdAt }`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollResponse {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    pub created_at: DateTime<Utc>,
}

impl From<Poll> for PollResponse {
    fn from(poll: Poll) -> Self {
        Self {
            id: poll.id.to_hex(),
            question: poll.question,
            options: poll.options,
            created_at: poll.created_at,
        }
    }
}
