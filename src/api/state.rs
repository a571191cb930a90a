//! API server state

use std::sync::Arc;

use crate::store::{ItemStore, SubmissionLog};

/// API server state, shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemStore>,
    pub submissions: Arc<SubmissionLog>,
}

impl AppState {
    pub fn new(items: Arc<ItemStore>, submissions: Arc<SubmissionLog>) -> Self {
        Self { items, submissions }
    }

    /// State with the sample items loaded and no submissions
    pub fn seeded() -> Self {
        Self::new(
            Arc::new(ItemStore::seeded()),
            Arc::new(SubmissionLog::new()),
        )
    }
}
