//! Persisted transaction outcome, one per completed evaluation.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One entry in a user's retained history window.
///
/// The history store exclusively owns these records: the engine appends and
/// reads, never mutates in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Transaction amount.
    pub amount: f64,
    /// Event time as recorded on the scored transaction.
    pub timestamp: DateTime<FixedOffset>,
    /// Score the engine assigned to the transaction.
    pub risk_score: f64,
}
