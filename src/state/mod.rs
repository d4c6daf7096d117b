use crate::db::poll_store::PollStore;

#[derive(Clone)]
pub struct AppState {
    pub store: PollStore,
}

impl AppState {
    pub fn new(store: PollStore) -> Self {
        Self { store }
    }
}
