//! History Store Port (Driven Port)
//!
//! Interface for the shared, per-user transaction history window. The store
//! exclusively owns the records; the engine appends and reads, never
//! mutates in place.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::history::HistoryRecord;

/// History store failures.
///
/// Reads degrade gracefully in the transaction scorer (treated as an empty
/// window); a failed append is reported by the caller because it loses
/// history.
#[derive(Debug, Error)]
pub enum HistoryStoreError {
    /// The store could not be reached.
    #[error("history store unavailable: {0}")]
    Unavailable(String),
}

/// Port for the bounded, time-windowed per-user transaction history.
#[async_trait]
pub trait HistoryStorePort: Send + Sync {
    /// Append a record to the front of the user's window.
    ///
    /// The append, the trim to the window capacity, and the expiry refresh
    /// are one atomic operation: concurrent writers for the same user must
    /// not lose each other's trims or leave the window unexpired.
    async fn record(&self, user_id: &str, record: HistoryRecord)
    -> Result<(), HistoryStoreError>;

    /// Up to `limit` most recent records for the user, newest first.
    ///
    /// Snapshot-at-read consistency; a read that misses a concurrently
    /// completing write is acceptable.
    async fn recent(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<HistoryRecord>, HistoryStoreError>;

    /// The entire retained window for the user, newest first.
    async fn window(&self, user_id: &str) -> Result<Vec<HistoryRecord>, HistoryStoreError>;
}
