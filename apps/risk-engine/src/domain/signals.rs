//! Immutable input records for risk evaluation.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::geo::GeoLocation;

/// Identity-verification status of a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    /// Verification completed successfully.
    Verified,
    /// Verification in progress.
    #[default]
    Pending,
    /// Verification failed.
    Rejected,
}

/// Snapshot of a user's standing at evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRiskSignal {
    /// User identifier.
    pub user_id: String,
    /// Source IP address of the user's session.
    pub ip_address: String,
    /// Lifetime transaction count.
    pub transaction_count: u64,
    /// Lifetime transaction volume.
    pub total_volume: f64,
    /// Caller-supplied location; when absent a live lookup is performed.
    #[serde(default)]
    pub geolocation: Option<GeoLocation>,
    /// Opaque device fingerprint, if collected.
    #[serde(default)]
    pub device_fingerprint: Option<String>,
    /// KYC status.
    #[serde(default)]
    pub kyc_status: KycStatus,
    /// Account age in whole days.
    #[serde(default)]
    pub account_age_days: u32,
    /// Recent failed login attempts.
    #[serde(default)]
    pub failed_login_attempts: u32,
    /// Prior suspicious-activity reports on this user.
    #[serde(default)]
    pub suspicious_activity_count: u32,
}

/// A single transaction to be scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRiskSignal {
    /// Transaction identifier.
    pub transaction_id: String,
    /// Transacting user.
    pub user_id: String,
    /// Transaction amount.
    pub amount: f64,
    /// Asset category being transacted.
    pub asset_type: String,
    /// Event time as recorded by the sender; the offset is honored by the
    /// time-of-day factor.
    pub timestamp: DateTime<FixedOffset>,
    /// Source IP address.
    pub ip_address: String,
    /// Caller-supplied location, if any.
    #[serde(default)]
    pub geolocation: Option<GeoLocation>,
    /// Payment rail used, e.g. `bank_transfer` or `crypto`.
    pub payment_method: String,
    /// Whether the transaction crosses a national border.
    #[serde(default)]
    pub is_cross_border: bool,
}
