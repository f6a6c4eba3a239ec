//! Process-wide conversation store: one in-progress conversation record per
//! user, keyed by Telegram user id.
//!
//! A record exists if and only if the user has an unfinished conversion
//! attempt; absence means "awaiting direction selection". Records are tiny
//! and never persisted across restarts.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::conversation::ConversationState;

/// Shared map from user id to that user's conversation state. All mutation
/// goes through one async mutex, so interleaved events for the same user
/// cannot corrupt a record.
#[derive(Clone, Default)]
pub struct ConversationStore {
    records: Arc<Mutex<HashMap<u64, ConversationState>>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the user's in-progress conversation, if any.
    pub async fn get(&self, user_id: u64) -> Option<ConversationState> {
        self.records.lock().await.get(&user_id).cloned()
    }

    /// Insert or replace the user's conversation record.
    pub async fn put(&self, user_id: u64, state: ConversationState) {
        self.records.lock().await.insert(user_id, state);
    }

    /// Drop the user's record; a no-op when none exists.
    pub async fn delete(&self, user_id: u64) {
        self.records.lock().await.remove(&user_id);
    }
}
