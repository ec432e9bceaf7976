//! Report Stats Use Case
//!
//! Aggregates a user's retained history window into summary statistics and
//! a coarse trend indicator.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::ports::{HistoryStoreError, HistoryStorePort};
use crate::domain::assessment::RiskThresholds;

/// Direction of a user's risk trend.
///
/// Computed as a two-point comparison of the oldest retained score against
/// the newest, not a regression. The comparison direction is kept as-is for
/// compatibility with existing consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTrend {
    /// Oldest retained score exceeds the newest.
    Increasing,
    /// Anything else, including a single-entry window.
    Stable,
}

/// Aggregate statistics over a user's retained history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskStats {
    /// The user the statistics describe.
    pub user_id: String,
    /// Number of retained history entries.
    pub transaction_count: usize,
    /// Arithmetic mean of stored risk scores, `0.0` when empty.
    pub average_risk_score: f64,
    /// Entries at or above the high threshold.
    pub high_risk_transactions: usize,
    /// Trend indicator; absent when no history exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_trend: Option<RiskTrend>,
}

/// Computes per-user risk statistics from the history store.
pub struct ReportStatsUseCase<H: HistoryStorePort> {
    history: Arc<H>,
    thresholds: RiskThresholds,
}

impl<H: HistoryStorePort> ReportStatsUseCase<H> {
    /// Create the use case with the history store handle and the
    /// process-wide threshold table.
    pub fn new(history: Arc<H>, thresholds: RiskThresholds) -> Self {
        Self {
            history,
            thresholds,
        }
    }

    /// Compute statistics over the user's entire retained window.
    ///
    /// Returns the zeroed shape when no history exists.
    pub async fn execute(&self, user_id: &str) -> Result<RiskStats, HistoryStoreError> {
        let window = self.history.window(user_id).await?;

        if window.is_empty() {
            return Ok(RiskStats {
                user_id: user_id.to_string(),
                transaction_count: 0,
                average_risk_score: 0.0,
                high_risk_transactions: 0,
                risk_trend: None,
            });
        }

        let count = window.len();
        let sum: f64 = window.iter().map(|r| r.risk_score).sum();
        let high_risk_transactions = window
            .iter()
            .filter(|r| r.risk_score >= self.thresholds.high)
            .count();

        // Window is newest first: first entry is the most recent, last is
        // the oldest retained.
        let newest = window[0].risk_score;
        let oldest = window[count - 1].risk_score;
        let risk_trend = if count > 1 && oldest > newest {
            RiskTrend::Increasing
        } else {
            RiskTrend::Stable
        };

        Ok(RiskStats {
            user_id: user_id.to_string(),
            transaction_count: count,
            average_risk_score: sum / count as f64,
            high_risk_transactions,
            risk_trend: Some(risk_trend),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::config::HistoryConfig;
    use crate::domain::history::HistoryRecord;
    use crate::infrastructure::persistence::InMemoryHistoryStore;

    fn record(risk_score: f64) -> HistoryRecord {
        HistoryRecord {
            amount: 100.0,
            timestamp: DateTime::parse_from_rfc3339("2024-06-01T14:00:00+00:00").unwrap(),
            risk_score,
        }
    }

    fn use_case() -> (ReportStatsUseCase<InMemoryHistoryStore>, Arc<InMemoryHistoryStore>) {
        let store = Arc::new(InMemoryHistoryStore::new(HistoryConfig::default()));
        (
            ReportStatsUseCase::new(Arc::clone(&store), RiskThresholds::DEFAULT),
            store,
        )
    }

    #[tokio::test]
    async fn empty_history_returns_zeroed_shape() {
        let (use_case, _) = use_case();

        let stats = use_case.execute("nobody").await.unwrap();

        assert_eq!(stats.transaction_count, 0);
        assert_eq!(stats.average_risk_score, 0.0);
        assert_eq!(stats.high_risk_transactions, 0);
        assert!(stats.risk_trend.is_none());

        let json = serde_json::to_value(&stats).unwrap();
        assert!(json.get("risk_trend").is_none());
    }

    #[tokio::test]
    async fn computes_mean_and_high_risk_count() {
        let (use_case, store) = use_case();
        for score in [0.2, 0.6, 0.9, 0.1] {
            store.record("u-1", record(score)).await.unwrap();
        }

        let stats = use_case.execute("u-1").await.unwrap();

        assert_eq!(stats.transaction_count, 4);
        assert!((stats.average_risk_score - 0.45).abs() < 1e-9);
        assert_eq!(stats.high_risk_transactions, 2);
    }

    #[tokio::test]
    async fn trend_is_increasing_when_oldest_exceeds_newest() {
        let (use_case, store) = use_case();
        // Appended in order, so 0.9 is the oldest retained and 0.1 the newest.
        store.record("u-1", record(0.9)).await.unwrap();
        store.record("u-1", record(0.1)).await.unwrap();

        let stats = use_case.execute("u-1").await.unwrap();
        assert_eq!(stats.risk_trend, Some(RiskTrend::Increasing));
    }

    #[tokio::test]
    async fn trend_is_stable_otherwise() {
        let (use_case, store) = use_case();
        store.record("u-1", record(0.1)).await.unwrap();
        store.record("u-1", record(0.9)).await.unwrap();

        let stats = use_case.execute("u-1").await.unwrap();
        assert_eq!(stats.risk_trend, Some(RiskTrend::Stable));

        store.record("u-2", record(0.5)).await.unwrap();
        let single = use_case.execute("u-2").await.unwrap();
        assert_eq!(single.risk_trend, Some(RiskTrend::Stable));
    }
}
