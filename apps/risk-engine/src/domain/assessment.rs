//! Risk assessment output: score aggregation, classification, and the
//! flag/recommendation emission that stays consistent with the score.

use serde::{Deserialize, Serialize};

use super::factors::{FactorOutcome, weighted_score};

/// Standing recommendations appended for `high` and `critical` assessments.
const ELEVATED_RECOMMENDATIONS: [&str; 2] = [
    "Block transactions until manual review",
    "Escalate to compliance team",
];

/// Standing recommendations appended for `medium` assessments.
const MEDIUM_RECOMMENDATIONS: [&str; 2] = [
    "Apply enhanced monitoring",
    "Require additional verification",
];

/// Discrete risk classification derived from the score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Below the medium cut point.
    Low,
    /// At or above the medium cut point.
    Medium,
    /// At or above the high cut point.
    High,
    /// At or above the critical cut point.
    Critical,
}

impl RiskLevel {
    /// Whether this level triggers the block-and-escalate recommendations.
    #[must_use]
    pub const fn is_elevated(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

/// Process-wide classification thresholds, ordered ascending.
///
/// Classification picks the highest cut point the score meets
/// (greater-or-equal). `low` is the default band rather than a cut point,
/// and `ceiling` is carried as configuration but is not used for
/// classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Default band floor.
    pub low: f64,
    /// Lowest non-low cut point.
    pub medium: f64,
    /// High cut point; also the bar for counting high-risk history entries.
    pub high: f64,
    /// Critical cut point.
    pub critical: f64,
    /// Upper guard value retained from the threshold table.
    pub ceiling: f64,
}

impl RiskThresholds {
    /// The fixed threshold table loaded once at process start.
    pub const DEFAULT: Self = Self {
        low: 0.0,
        medium: 0.3,
        high: 0.6,
        critical: 0.8,
        ceiling: 0.95,
    };

    /// Classify a score by the highest threshold met.
    #[must_use]
    pub fn classify(&self, score: f64) -> RiskLevel {
        if score >= self.critical {
            RiskLevel::Critical
        } else if score >= self.high {
            RiskLevel::High
        } else if score >= self.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The outcome of scoring one user or one transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Aggregated weighted score, clamped to `[0, 1]`.
    pub risk_score: f64,
    /// Classification of `risk_score` against the threshold table.
    pub risk_level: RiskLevel,
    /// Explanatory flags in factor evaluation order.
    pub flags: Vec<String>,
    /// Action recommendations, deduplicated in emission order.
    pub recommendations: Vec<String>,
    /// Static quality indicator for the assessment type, not derived from
    /// the score.
    pub confidence: f64,
}

impl RiskAssessment {
    /// Aggregate factor outcomes into an assessment.
    ///
    /// Flags and factor recommendations are taken from the outcomes that fed
    /// the score; standing recommendations for the resulting level are
    /// appended afterwards.
    #[must_use]
    pub fn from_outcomes(
        outcomes: &[FactorOutcome],
        confidence: f64,
        thresholds: &RiskThresholds,
    ) -> Self {
        let risk_score = weighted_score(outcomes);
        let risk_level = thresholds.classify(risk_score);

        let flags = outcomes
            .iter()
            .filter_map(|o| o.flag.map(str::to_string))
            .collect();

        let mut recommendations: Vec<String> = Vec::new();
        let mut push_unique = |rec: &str| {
            if !recommendations.iter().any(|r| r == rec) {
                recommendations.push(rec.to_string());
            }
        };

        for outcome in outcomes {
            for rec in outcome.recommendations {
                push_unique(rec);
            }
        }

        if risk_level.is_elevated() {
            for rec in ELEVATED_RECOMMENDATIONS {
                push_unique(rec);
            }
        } else if risk_level == RiskLevel::Medium {
            for rec in MEDIUM_RECOMMENDATIONS {
                push_unique(rec);
            }
        }

        Self {
            risk_score,
            risk_level,
            flags,
            recommendations,
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0.0, RiskLevel::Low; "floor")]
    #[test_case(0.29, RiskLevel::Low; "just below medium")]
    #[test_case(0.3, RiskLevel::Medium; "medium boundary")]
    #[test_case(0.59, RiskLevel::Medium; "just below high")]
    #[test_case(0.6, RiskLevel::High; "high boundary")]
    #[test_case(0.79, RiskLevel::High; "just below critical")]
    #[test_case(0.8, RiskLevel::Critical; "critical boundary")]
    #[test_case(1.0, RiskLevel::Critical; "maximum")]
    fn classify_uses_highest_threshold_met(score: f64, expected: RiskLevel) {
        assert_eq!(RiskThresholds::DEFAULT.classify(score), expected);
    }

    #[test]
    fn thresholds_are_ordered_ascending() {
        let t = RiskThresholds::DEFAULT;
        assert!(t.low < t.medium);
        assert!(t.medium < t.high);
        assert!(t.high < t.critical);
        assert!(t.critical < t.ceiling);
    }

    #[test]
    fn risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::High < RiskLevel::Critical);
        assert!(RiskLevel::High.is_elevated());
        assert!(!RiskLevel::Medium.is_elevated());
    }

    #[test]
    fn elevated_levels_append_standing_recommendations() {
        let outcomes = [FactorOutcome::flagged(
            "amount",
            1.0,
            1.0,
            "Large transaction amount",
            &["Verify source of funds"],
        )];
        let assessment =
            RiskAssessment::from_outcomes(&outcomes, 0.75, &RiskThresholds::DEFAULT);

        assert_eq!(assessment.risk_level, RiskLevel::Critical);
        assert_eq!(
            assessment.recommendations,
            vec![
                "Verify source of funds",
                "Block transactions until manual review",
                "Escalate to compliance team",
            ]
        );
    }

    #[test]
    fn medium_level_appends_monitoring_recommendations() {
        let outcomes = [FactorOutcome::unflagged("amount", 0.4, 1.0)];
        let assessment =
            RiskAssessment::from_outcomes(&outcomes, 0.75, &RiskThresholds::DEFAULT);

        assert_eq!(assessment.risk_level, RiskLevel::Medium);
        assert_eq!(
            assessment.recommendations,
            vec!["Apply enhanced monitoring", "Require additional verification"]
        );
    }

    #[test]
    fn recommendations_deduplicate_in_emission_order() {
        let outcomes = [
            FactorOutcome::flagged("a", 1.0, 0.5, "A", &["Verify source of funds"]),
            FactorOutcome::flagged("b", 1.0, 0.5, "B", &["Verify source of funds"]),
        ];
        let assessment =
            RiskAssessment::from_outcomes(&outcomes, 0.8, &RiskThresholds::DEFAULT);

        assert_eq!(assessment.flags, vec!["A", "B"]);
        assert_eq!(
            assessment
                .recommendations
                .iter()
                .filter(|r| r.as_str() == "Verify source of funds")
                .count(),
            1
        );
    }

    #[test]
    fn serializes_level_lowercase() {
        let json = serde_json::to_string(&RiskLevel::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }
}
