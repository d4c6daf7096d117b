use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A poll document as stored in the `polls` collection.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Poll {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub question: String,
    pub options: Vec<PollOption>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// One selectable choice within a poll. The `id` is assigned once at
/// creation and never changes; vote updates filter on it, so an increment
/// can only land on the option it was resolved against.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PollOption {
    pub id: String,
    pub text: String,
    pub votes: u32,
}

impl Poll {
    pub fn new(question: String, option_texts: Vec<String>) -> Self {
        Self {
            id: ObjectId::new(),
            question,
            options: option_texts
                .into_iter()
                .map(|text| PollOption {
                    id: ObjectId::new().to_hex(),
                    text,
                    votes: 0,
                })
                .collect(),
            created_at: Utc::now(),
        }
    }
}
