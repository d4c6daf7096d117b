use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};

use crate::models::poll_models::Poll;
use crate::utils::error::{AppError, AppResult};

/// Handle over the `polls` collection. Constructed once at startup and
/// passed into the service layer through [`AppState`](crate::state::AppState).
#[derive(Clone)]
pub struct PollStore {
    polls: Collection<Poll>,
}

impl PollStore {
    pub fn new(db: &Database) -> Self {
        Self {
            polls: db.collection::<Poll>("polls"),
        }
    }

    /// Creates a poll with every option at zero votes. Option texts are
    /// expected pre-trimmed; emptiness and the minimum-of-two rule are
    /// enforced here so no caller can insert a degenerate poll.
    pub async fn insert(&self, question: String, options: Vec<String>) -> AppResult<Poll> {
        if question.is_empty() {
            return Err(AppError::ValidationError(
                "Poll question must not be empty".to_string(),
            ));
        }
        if options.len() < 2 {
            return Err(AppError::ValidationError(
                "Poll must have at least 2 options".to_string(),
            ));
        }
        if options.iter().any(|text| text.is_empty()) {
            return Err(AppError::ValidationError(
                "Poll options must not be empty".to_string(),
            ));
        }

        let poll = Poll::new(question, options);
        self.polls.insert_one(&poll).await?;

        Ok(poll)
    }

    /// All polls, newest first.
    pub async fn list_all(&self) -> AppResult<Vec<Poll>> {
        let mut cursor = self
            .polls
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await?;

        let mut polls = Vec::new();
        while let Some(poll) = cursor.try_next().await? {
            polls.push(poll);
        }

        Ok(polls)
    }

    pub async fn get_by_id(&self, poll_id: &str) -> AppResult<Poll> {
        let obj_id = parse_poll_id(poll_id)?;

        self.polls
            .find_one(doc! { "_id": obj_id })
            .await?
            .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))
    }

    pub async fn delete_by_id(&self, poll_id: &str) -> AppResult<()> {
        let obj_id = parse_poll_id(poll_id)?;

        let result = self.polls.delete_one(doc! { "_id": obj_id }).await?;
        if result.deleted_count == 0 {
            return Err(AppError::NotFound("Poll not found".to_string()));
        }

        Ok(())
    }

    /// Applies exactly one vote to the option at `option_index` and returns
    /// the updated poll.
    ///
    /// The index is resolved to the option's stable id and the increment is
    /// a single `$inc` filtered on that id, so concurrent votes cannot lose
    /// updates and the count can only land on the option the index resolved
    /// to.
    pub async fn increment_vote(&self, poll_id: &str, option_index: usize) -> AppResult<Poll> {
        let obj_id = parse_poll_id(poll_id)?;

        let poll = self
            .polls
            .find_one(doc! { "_id": obj_id })
            .await?
            .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

        let option = poll.options.get(option_index).ok_or_else(|| {
            AppError::OutOfRange(format!(
                "Option index {} is out of range for this poll",
                option_index
            ))
        })?;

        let filter = doc! { "_id": obj_id, "options.id": &option.id };
        let update = doc! { "$inc": { "options.$.votes": 1 } };

        let update_result = self.polls.update_one(filter, update).await?;
        if update_result.matched_count == 0 {
            // Poll vanished between lookup and update.
            return Err(AppError::NotFound("Poll not found".to_string()));
        }

        self.polls
            .find_one(doc! { "_id": obj_id })
            .await?
            .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))
    }
}

fn parse_poll_id(poll_id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(poll_id).map_err(|_| AppError::NotFound("Poll not found".to_string()))
}
