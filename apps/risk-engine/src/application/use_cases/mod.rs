//! Application use cases orchestrating domain scoring and ports.

mod evaluate_transaction;
mod evaluate_user;
mod report_stats;

pub use evaluate_transaction::EvaluateTransactionUseCase;
pub use evaluate_user::EvaluateUserUseCase;
pub use report_stats::{ReportStatsUseCase, RiskStats, RiskTrend};
