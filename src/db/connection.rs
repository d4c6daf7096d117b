use mongodb::{options::ClientOptions, Client, Database};

use crate::config::Config;
use crate::utils::error::{AppError, AppResult};

pub async fn init_db(config: &Config) -> AppResult<Database> {
    let mut client_options = ClientOptions::parse(&config.mongo_uri)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to parse MongoDB URI: {}", e)))?;

    client_options.app_name = Some("VotingApp".to_string());

    let client = Client::with_options(client_options).map_err(|e| {
        AppError::DatabaseError(format!("Failed to initialize MongoDB client: {}", e))
    })?;

    Ok(client.database(&config.db_name))
}
