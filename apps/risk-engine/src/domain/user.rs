//! User-path factor evaluation.
//!
//! Six independent factors computed from instantaneous input; no history is
//! consulted. Weights are fixed here and sum to 1.0.

use super::factors::FactorOutcome;
use super::geo::IpReputation;
use super::signals::{KycStatus, UserRiskSignal};

/// Static quality indicator attached to user assessments.
pub const USER_CONFIDENCE: f64 = 0.8;

const IP_REPUTATION_WEIGHT: f64 = 0.20;
const ACCOUNT_AGE_WEIGHT: f64 = 0.15;
const TRANSACTION_COUNT_WEIGHT: f64 = 0.20;
const TOTAL_VOLUME_WEIGHT: f64 = 0.15;
const FAILED_LOGIN_WEIGHT: f64 = 0.10;
const KYC_STATUS_WEIGHT: f64 = 0.20;

/// Flag threshold on the inverted reputation score.
const SUSPICIOUS_IP_RISK: f64 = 0.7;

/// Evaluate all user risk factors.
///
/// The returned array is the only way to assemble a user factor set, which
/// keeps the weight-sums-to-one invariant structural.
#[must_use]
pub fn evaluate_user_factors(
    signal: &UserRiskSignal,
    reputation: &IpReputation,
) -> [FactorOutcome; 6] {
    [
        ip_reputation_factor(reputation),
        account_age_factor(signal.account_age_days),
        transaction_count_factor(signal.transaction_count),
        total_volume_factor(signal.total_volume),
        failed_login_factor(signal.failed_login_attempts),
        kyc_status_factor(signal.kyc_status),
    ]
}

/// Risk is the inverted trust score.
fn ip_reputation_factor(reputation: &IpReputation) -> FactorOutcome {
    let risk = 1.0 - reputation.reputation_score;
    if risk > SUSPICIOUS_IP_RISK {
        FactorOutcome::flagged(
            "ip_reputation",
            risk,
            IP_REPUTATION_WEIGHT,
            "Suspicious IP address",
            &["Verify user identity through additional channels"],
        )
    } else {
        FactorOutcome::unflagged("ip_reputation", risk, IP_REPUTATION_WEIGHT)
    }
}

fn account_age_factor(account_age_days: u32) -> FactorOutcome {
    match account_age_days {
        0 => FactorOutcome::flagged(
            "account_age",
            0.8,
            ACCOUNT_AGE_WEIGHT,
            "New account (less than 1 day old)",
            &["Apply enhanced monitoring for new accounts"],
        ),
        1..=6 => FactorOutcome::unflagged("account_age", 0.6, ACCOUNT_AGE_WEIGHT),
        7..=29 => FactorOutcome::unflagged("account_age", 0.3, ACCOUNT_AGE_WEIGHT),
        _ => FactorOutcome::unflagged("account_age", 0.1, ACCOUNT_AGE_WEIGHT),
    }
}

fn transaction_count_factor(transaction_count: u64) -> FactorOutcome {
    if transaction_count > 50 {
        FactorOutcome::flagged(
            "transaction_count",
            0.7,
            TRANSACTION_COUNT_WEIGHT,
            "High frequency trading pattern",
            &[],
        )
    } else if transaction_count > 20 {
        FactorOutcome::unflagged("transaction_count", 0.4, TRANSACTION_COUNT_WEIGHT)
    } else {
        FactorOutcome::unflagged("transaction_count", 0.1, TRANSACTION_COUNT_WEIGHT)
    }
}

fn total_volume_factor(total_volume: f64) -> FactorOutcome {
    if total_volume > 100_000.0 {
        FactorOutcome::flagged(
            "total_volume",
            0.6,
            TOTAL_VOLUME_WEIGHT,
            "High volume transactions",
            &["Verify source of funds"],
        )
    } else if total_volume > 50_000.0 {
        FactorOutcome::unflagged("total_volume", 0.4, TOTAL_VOLUME_WEIGHT)
    } else {
        FactorOutcome::unflagged("total_volume", 0.1, TOTAL_VOLUME_WEIGHT)
    }
}

fn failed_login_factor(failed_login_attempts: u32) -> FactorOutcome {
    if failed_login_attempts > 5 {
        FactorOutcome::flagged(
            "failed_logins",
            0.8,
            FAILED_LOGIN_WEIGHT,
            "Multiple failed login attempts",
            &["Require password reset and 2FA"],
        )
    } else if failed_login_attempts > 2 {
        FactorOutcome::unflagged("failed_logins", 0.4, FAILED_LOGIN_WEIGHT)
    } else {
        FactorOutcome::unflagged("failed_logins", 0.1, FAILED_LOGIN_WEIGHT)
    }
}

fn kyc_status_factor(kyc_status: KycStatus) -> FactorOutcome {
    match kyc_status {
        KycStatus::Rejected => FactorOutcome::flagged(
            "kyc_status",
            0.9,
            KYC_STATUS_WEIGHT,
            "KYC verification failed",
            &["Manual review required"],
        ),
        KycStatus::Pending => FactorOutcome::flagged(
            "kyc_status",
            0.5,
            KYC_STATUS_WEIGHT,
            "KYC verification pending",
            &[],
        ),
        KycStatus::Verified => FactorOutcome::unflagged("kyc_status", 0.1, KYC_STATUS_WEIGHT),
    }
}
