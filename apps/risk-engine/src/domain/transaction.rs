//! Transaction-path factor evaluation.
//!
//! Five factors come from the transaction itself; the frequency factor is
//! fed by the count of recently retained history entries for the user,
//! which makes transaction scoring order-dependent. Weights are fixed here
//! and sum to 1.0.

use chrono::Timelike;

use super::factors::FactorOutcome;
use super::signals::TransactionRiskSignal;

/// Static quality indicator attached to transaction assessments.
pub const TRANSACTION_CONFIDENCE: f64 = 0.75;

/// How many of the most recent prior history entries feed the frequency
/// factor.
pub const FREQUENCY_LOOKBACK: usize = 10;

const AMOUNT_WEIGHT: f64 = 0.30;
const FREQUENCY_WEIGHT: f64 = 0.20;
const CROSS_BORDER_WEIGHT: f64 = 0.15;
const TIME_OF_DAY_WEIGHT: f64 = 0.10;
const PAYMENT_METHOD_WEIGHT: f64 = 0.15;
const ASSET_TYPE_WEIGHT: f64 = 0.10;

/// Asset categories scored as high risk.
const HIGH_RISK_ASSETS: [&str; 3] = ["art", "luxury", "collectibles"];

/// Evaluate all transaction risk factors.
///
/// `recent_count` is the number of prior history entries read for the user
/// (capped at [`FREQUENCY_LOOKBACK`]) before this transaction is appended.
#[must_use]
pub fn evaluate_transaction_factors(
    signal: &TransactionRiskSignal,
    recent_count: usize,
) -> [FactorOutcome; 6] {
    [
        amount_factor(signal.amount),
        frequency_factor(recent_count),
        cross_border_factor(signal.is_cross_border),
        time_of_day_factor(signal.timestamp.hour()),
        payment_method_factor(&signal.payment_method),
        asset_type_factor(&signal.asset_type),
    ]
}

fn amount_factor(amount: f64) -> FactorOutcome {
    if amount > 50_000.0 {
        FactorOutcome::flagged(
            "amount",
            0.8,
            AMOUNT_WEIGHT,
            "Large transaction amount",
            &["Verify source of funds"],
        )
    } else if amount > 10_000.0 {
        FactorOutcome::unflagged("amount", 0.5, AMOUNT_WEIGHT)
    } else {
        FactorOutcome::unflagged("amount", 0.2, AMOUNT_WEIGHT)
    }
}

fn frequency_factor(recent_count: usize) -> FactorOutcome {
    if recent_count >= 5 {
        FactorOutcome::flagged(
            "frequency",
            0.7,
            FREQUENCY_WEIGHT,
            "High transaction frequency",
            &[],
        )
    } else if recent_count >= 3 {
        FactorOutcome::unflagged("frequency", 0.4, FREQUENCY_WEIGHT)
    } else {
        FactorOutcome::unflagged("frequency", 0.1, FREQUENCY_WEIGHT)
    }
}

fn cross_border_factor(is_cross_border: bool) -> FactorOutcome {
    if is_cross_border {
        FactorOutcome::flagged(
            "cross_border",
            0.6,
            CROSS_BORDER_WEIGHT,
            "Cross-border transaction",
            &["Verify compliance with international regulations"],
        )
    } else {
        FactorOutcome::unflagged("cross_border", 0.2, CROSS_BORDER_WEIGHT)
    }
}

/// Hour is taken in the offset the sender recorded, not server time.
fn time_of_day_factor(hour: u32) -> FactorOutcome {
    if !(6..=22).contains(&hour) {
        FactorOutcome::flagged(
            "time_of_day",
            0.5,
            TIME_OF_DAY_WEIGHT,
            "Transaction outside business hours",
            &[],
        )
    } else {
        FactorOutcome::unflagged("time_of_day", 0.1, TIME_OF_DAY_WEIGHT)
    }
}

fn payment_method_factor(payment_method: &str) -> FactorOutcome {
    match payment_method {
        "crypto" | "anonymous" => FactorOutcome::flagged(
            "payment_method",
            0.6,
            PAYMENT_METHOD_WEIGHT,
            "High-risk payment method",
            &[],
        ),
        "credit_card" | "bank_transfer" => {
            FactorOutcome::unflagged("payment_method", 0.2, PAYMENT_METHOD_WEIGHT)
        }
        _ => FactorOutcome::unflagged("payment_method", 0.3, PAYMENT_METHOD_WEIGHT),
    }
}

fn asset_type_factor(asset_type: &str) -> FactorOutcome {
    if HIGH_RISK_ASSETS.contains(&asset_type) {
        FactorOutcome::flagged(
            "asset_type",
            0.5,
            ASSET_TYPE_WEIGHT,
            "High-risk asset type",
            &[],
        )
    } else {
        FactorOutcome::unflagged("asset_type", 0.2, ASSET_TYPE_WEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use proptest::prelude::*;
    use test_case::test_case;

    use super::*;
    use crate::domain::factors::weighted_score;

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

    #[test]
    fn transaction_weights_sum_to_one() {
        let outcomes = evaluate_transaction_factors(&signal(100.0), 0);
        let total: f64 = outcomes.iter().map(|o| o.factor.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test_case(60_000.0, 0.8; "large")]
    #[test_case(20_000.0, 0.5; "sizable")]
    #[test_case(500.0, 0.2; "small")]
    fn amount_buckets(amount: f64, expected: f64) {
        assert_eq!(amount_factor(amount).factor.normalized_value, expected);
    }

    #[test_case(10, 0.7; "at lookback cap")]
    #[test_case(5, 0.7; "busy")]
    #[test_case(3, 0.4; "moderate")]
    #[test_case(2, 0.1; "quiet")]
    fn frequency_buckets(recent: usize, expected: f64) {
        assert_eq!(frequency_factor(recent).factor.normalized_value, expected);
    }

    #[test_case(2, 0.5; "small hours")]
    #[test_case(23, 0.5; "late evening")]
    #[test_case(6, 0.1; "start of business")]
    #[test_case(22, 0.1; "end of business")]
    fn time_of_day_buckets(hour: u32, expected: f64) {
        assert_eq!(time_of_day_factor(hour).factor.normalized_value, expected);
    }

    #[test_case("crypto", 0.6; "crypto")]
    #[test_case("anonymous", 0.6; "anonymous")]
    #[test_case("bank_transfer", 0.2; "bank transfer")]
    #[test_case("credit_card", 0.2; "credit card")]
    #[test_case("money_order", 0.3; "unrecognized rail")]
    fn payment_method_buckets(method: &str, expected: f64) {
        assert_eq!(
            payment_method_factor(method).factor.normalized_value,
            expected
        );
    }

    #[test_case("art", 0.5; "art")]
    #[test_case("collectibles", 0.5; "collectibles")]
    #[test_case("real_estate", 0.2; "real estate")]
    fn asset_type_buckets(asset: &str, expected: f64) {
        assert_eq!(asset_type_factor(asset).factor.normalized_value, expected);
    }

    #[test]
    fn cross_border_raises_compliance_recommendation() {
        let outcome = cross_border_factor(true);
        assert_eq!(outcome.flag, Some("Cross-border transaction"));
        assert_eq!(
            outcome.recommendations,
            &["Verify compliance with international regulations"]
        );
    }

    #[test]
    fn hour_uses_recorded_offset_not_utc() {
        // 23:30+09:00 is 14:30 UTC; the sender's clock says outside business hours.
        let mut s = signal(100.0);
        s.timestamp = DateTime::parse_from_rfc3339("2024-06-01T23:30:00+09:00").unwrap();
        let outcomes = evaluate_transaction_factors(&s, 0);
        assert_eq!(outcomes[3].factor.normalized_value, 0.5);
    }

    proptest! {
        /// Raising the amount never lowers the score.
        #[test]
        fn larger_amounts_never_score_lower(amount_a in 0.0f64..1_000_000.0, amount_b in 0.0f64..1_000_000.0) {
            let (smaller, larger) = if amount_a <= amount_b {
                (amount_a, amount_b)
            } else {
                (amount_b, amount_a)
            };
            let small_score = weighted_score(&evaluate_transaction_factors(&signal(smaller), 0));
            let large_score = weighted_score(&evaluate_transaction_factors(&signal(larger), 0));
            prop_assert!(large_score >= small_score);
        }

        /// Every transaction score stays inside the unit interval.
        #[test]
        fn transaction_score_in_unit_interval(
            amount in 0.0f64..10_000_000.0,
            recent in 0usize..=10,
            cross_border in any::<bool>(),
            hour in 0u32..24,
        ) {
            let mut s = signal(amount);
            s.is_cross_border = cross_border;
            s.timestamp = DateTime::parse_from_rfc3339(
                &format!("2024-06-01T{hour:02}:00:00+00:00"),
            ).unwrap();
            let score = weighted_score(&evaluate_transaction_factors(&s, recent));
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }
}
