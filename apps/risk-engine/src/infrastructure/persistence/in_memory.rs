//! In-memory history store.
//!
//! Process-local implementation of [`HistoryStorePort`]. Each user's window
//! is append-front, trimmed to capacity, and re-expired inside one write
//! lock, so concurrent writers for the same user cannot lose trims or leave
//! the window unexpired.

use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::application::ports::{HistoryStoreError, HistoryStorePort};
use crate::config::HistoryConfig;
use crate::domain::history::HistoryRecord;

/// One user's retained window plus its expiry deadline.
#[derive(Debug)]
struct UserWindow {
    /// Records, newest first.
    records: VecDeque<HistoryRecord>,
    /// Deadline after which the window is treated as gone.
    expires_at: DateTime<Utc>,
}

/// In-memory implementation of the history store.
#[derive(Debug)]
pub struct InMemoryHistoryStore {
    windows: RwLock<HashMap<String, UserWindow>>,
    max_entries: usize,
    ttl: Duration,
}

impl InMemoryHistoryStore {
    /// Create a store with the given windowing configuration.
    #[must_use]
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            windows: RwLock::new(HashMap::new()),
            max_entries: config.max_entries,
            ttl: Duration::days(config.ttl_days),
        }
    }

    fn read_window(&self, user_id: &str, limit: Option<usize>) -> Vec<HistoryRecord> {
        let windows = self
            .windows
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let Some(window) = windows.get(user_id) else {
            return Vec::new();
        };
        if window.expires_at <= Utc::now() {
            return Vec::new();
        }
        let take = limit.unwrap_or(window.records.len());
        window.records.iter().take(take).cloned().collect()
    }
}

#[async_trait]
impl HistoryStorePort for InMemoryHistoryStore {
    async fn record(
        &self,
        user_id: &str,
        record: HistoryRecord,
    ) -> Result<(), HistoryStoreError> {
        let now = Utc::now();
        let mut windows = self
            .windows
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let window = windows
            .entry(user_id.to_string())
            .or_insert_with(|| UserWindow {
                records: VecDeque::new(),
                expires_at: now + self.ttl,
            });

        // A window past its deadline is logically gone; start fresh rather
        // than resurrecting stale entries on the next write.
        if window.expires_at <= now {
            window.records.clear();
        }

        window.records.push_front(record);
        window.records.truncate(self.max_entries);
        window.expires_at = now + self.ttl;
        Ok(())
    }

    async fn recent(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<HistoryRecord>, HistoryStoreError> {
        Ok(self.read_window(user_id, Some(limit)))
    }

    async fn window(&self, user_id: &str) -> Result<Vec<HistoryRecord>, HistoryStoreError> {
        Ok(self.read_window(user_id, None))
    }
}
