use mongodb::{bson::oid::ObjectId, Client, Database};

use voting_app::db::poll_store::PollStore;

/// Store over a throwaway database on the MongoDB named by `TEST_MONGO_URI`.
/// Tests that get `None` back skip themselves.
pub struct TestDb {
    pub db: Database,
    pub store: PollStore,
}

pub async fn test_store() -> Option<TestDb> {
    let uri = std::env::var("TEST_MONGO_URI").ok()?;

    let client = Client::with_uri_str(&uri)
        .await
        .expect("failed to connect to test MongoDB");
    let db = client.database(&format!("voting-app-test-{}", ObjectId::new().to_hex()));
    let store = PollStore::new(&db);

    Some(TestDb { db, store })
}

impl TestDb {
    pub async fn cleanup(self) {
        let _ = self.db.drop().await;
    }
}
