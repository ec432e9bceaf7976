//! Domain layer - Core risk scoring logic with no external dependencies.

pub mod assessment;
pub mod factors;
pub mod geo;
pub mod history;
pub mod signals;
pub mod transaction;
pub mod user;

pub use assessment::{RiskAssessment, RiskLevel, RiskThresholds};
pub use factors::{FactorOutcome, RiskFactor};
pub use geo::{GeoLocation, GeoLookup, IpReputation};
pub use history::HistoryRecord;
pub use signals::{KycStatus, TransactionRiskSignal, UserRiskSignal};
