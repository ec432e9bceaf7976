//! Evaluate Transaction Use Case
//!
//! Scores a transaction and appends the outcome to the user's history
//! window. Reading the recent window for the frequency factor makes this
//! scorer stateful and order-dependent per user.

use std::sync::Arc;

use crate::application::ports::HistoryStorePort;
use crate::domain::assessment::{RiskAssessment, RiskThresholds};
use crate::domain::history::HistoryRecord;
use crate::domain::signals::TransactionRiskSignal;
use crate::domain::transaction::{
    FREQUENCY_LOOKBACK, TRANSACTION_CONFIDENCE, evaluate_transaction_factors,
};

/// Scores transactions and records their outcomes.
pub struct EvaluateTransactionUseCase<H: HistoryStorePort> {
    history: Arc<H>,
    thresholds: RiskThresholds,
}

impl<H: HistoryStorePort> EvaluateTransactionUseCase<H> {
    /// Create the use case with the history store handle and the
    /// process-wide threshold table.
    pub fn new(history: Arc<H>, thresholds: RiskThresholds) -> Self {
        Self {
            history,
            thresholds,
        }
    }

    /// Produce a risk assessment for the transaction and append it to the
    /// user's history window.
    ///
    /// An unreachable store degrades the frequency factor to an empty
    /// window; a failed append is logged but does not fail the assessment.
    pub async fn execute(&self, signal: &TransactionRiskSignal) -> RiskAssessment {
        tracing::info!(
            transaction_id = %signal.transaction_id,
            user_id = %signal.user_id,
            "Evaluating transaction risk"
        );

        let recent_count = match self
            .history
            .recent(&signal.user_id, FREQUENCY_LOOKBACK)
            .await
        {
            Ok(records) => records.len(),
            Err(error) => {
                tracing::warn!(
                    user_id = %signal.user_id,
                    error = %error,
                    "History read failed, scoring frequency over empty window"
                );
                0
            }
        };

        let outcomes = evaluate_transaction_factors(signal, recent_count);
        let assessment =
            RiskAssessment::from_outcomes(&outcomes, TRANSACTION_CONFIDENCE, &self.thresholds);

        let record = HistoryRecord {
            amount: signal.amount,
            timestamp: signal.timestamp,
            risk_score: assessment.risk_score,
        };
        if let Err(error) = self.history.record(&signal.user_id, record).await {
            tracing::error!(
                transaction_id = %signal.transaction_id,
                user_id = %signal.user_id,
                error = %error,
                "History append failed, transaction outcome lost"
            );
        }

        tracing::info!(
            transaction_id = %signal.transaction_id,
            risk_level = ?assessment.risk_level,
            risk_score = assessment.risk_score,
            "Transaction risk evaluation completed"
        );

        assessment
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::DateTime;

    use super::*;
    use crate::application::ports::HistoryStoreError;
    use crate::config::HistoryConfig;
    use crate::domain::assessment::RiskLevel;
    use crate::infrastructure::persistence::InMemoryHistoryStore;

    fn signal(amount: f64) -> TransactionRiskSignal {
        TransactionRiskSignal {
            transaction_id: "tx-1".to_string(),
            user_id: "u-1".to_string(),
            amount,
            asset_type: "real_estate".to_string(),
            timestamp: DateTime::parse_from_rfc3339("2024-06-01T14:00:00+00:00").unwrap(),
            ip_address: "8.8.8.8".to_string(),
            geolocation: None,
            payment_method: "bank_transfer".to_string(),
            is_cross_border: false,
        }
    }

    fn use_case() -> (
        EvaluateTransactionUseCase<InMemoryHistoryStore>,
        Arc<InMemoryHistoryStore>,
    ) {
        let store = Arc::new(InMemoryHistoryStore::new(HistoryConfig::default()));
        (
            EvaluateTransactionUseCase::new(Arc::clone(&store), RiskThresholds::DEFAULT),
            store,
        )
    }

    #[tokio::test]
    async fn maximal_buckets_without_history_score_medium() {
        let (use_case, _) = use_case();
        let signal = TransactionRiskSignal {
            amount: 60_000.0,
            payment_method: "crypto".to_string(),
            is_cross_border: true,
            asset_type: "art".to_string(),
            timestamp: DateTime::parse_from_rfc3339("2024-06-01T02:00:00+00:00").unwrap(),
            ..signal(0.0)
        };

        let assessment = use_case.execute(&signal).await;

        // All factors except frequency sit in their top buckets; with no
        // prior history the weighted sum is 0.54.
        assert!((assessment.risk_score - 0.54).abs() < 1e-9);
        assert_eq!(assessment.risk_level, RiskLevel::Medium);
        assert_eq!(assessment.confidence, 0.75);
        for flag in [
            "Large transaction amount",
            "Cross-border transaction",
            "Transaction outside business hours",
            "High-risk payment method",
            "High-risk asset type",
        ] {
            assert!(assessment.flags.iter().any(|f| f == flag), "missing {flag}");
        }
    }

    #[tokio::test]
    async fn evaluation_appends_to_history() {
        let (use_case, store) = use_case();

        let assessment = use_case.execute(&signal(500.0)).await;

        let window = store.window("u-1").await.unwrap();
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].amount, 500.0);
        assert_eq!(window[0].risk_score, assessment.risk_score);
    }

    #[tokio::test]
    async fn frequency_factor_makes_scoring_order_dependent() {
        let (use_case, _) = use_case();

        let first = use_case.execute(&signal(500.0)).await;
        for _ in 0..4 {
            use_case.execute(&signal(500.0)).await;
        }
        // Sixth identical transaction sees five prior entries.
        let sixth = use_case.execute(&signal(500.0)).await;

        assert!(sixth.risk_score > first.risk_score);
        assert!(sixth.flags.iter().any(|f| f == "High transaction frequency"));
    }

    /// Store that refuses every operation.
    struct UnreachableStore;

    #[async_trait]
    impl HistoryStorePort for UnreachableStore {
        async fn record(
            &self,
            _user_id: &str,
            _record: HistoryRecord,
        ) -> Result<(), HistoryStoreError> {
            Err(HistoryStoreError::Unavailable("down".to_string()))
        }

        async fn recent(
            &self,
            _user_id: &str,
            _limit: usize,
        ) -> Result<Vec<HistoryRecord>, HistoryStoreError> {
            Err(HistoryStoreError::Unavailable("down".to_string()))
        }

        async fn window(&self, _user_id: &str) -> Result<Vec<HistoryRecord>, HistoryStoreError> {
            Err(HistoryStoreError::Unavailable("down".to_string()))
        }
    }

    #[tokio::test]
    async fn unreachable_store_still_scores_the_transaction() {
        let use_case =
            EvaluateTransactionUseCase::new(Arc::new(UnreachableStore), RiskThresholds::DEFAULT);

        let assessment = use_case.execute(&signal(60_000.0)).await;

        // Frequency degrades to the empty-window bucket; all other factors apply.
        assert!(assessment.flags.iter().any(|f| f == "Large transaction amount"));
        assert!(!assessment.flags.iter().any(|f| f == "High transaction frequency"));
    }
}
