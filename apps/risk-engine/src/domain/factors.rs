//! Weighted risk factor model.
//!
//! Every assessment is built from a fixed-arity set of [`FactorOutcome`]s
//! produced by the evaluation functions in [`crate::domain::user`] and
//! [`crate::domain::transaction`]. The weights live next to those
//! constructors, so a factor set whose weights do not sum to 1.0 cannot be
//! assembled from the public API.

/// A named, normalized risk contribution paired with a fixed weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskFactor {
    /// Stable factor identifier.
    pub name: &'static str,
    /// Normalized contribution in `[0, 1]`.
    pub normalized_value: f64,
    /// Fixed weight in `(0, 1]`.
    pub weight: f64,
}

impl RiskFactor {
    /// Weighted contribution of this factor to the overall score.
    #[must_use]
    pub fn contribution(&self) -> f64 {
        self.normalized_value * self.weight
    }
}

/// One factor evaluation: the weighted contribution plus the explanatory
/// output derived from the same bucketing decision.
///
/// Flags and recommendations are attached here rather than recomputed
/// downstream, so they cannot drift from the score they explain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorOutcome {
    /// The scored factor.
    pub factor: RiskFactor,
    /// Human-readable flag raised by this factor, if any.
    pub flag: Option<&'static str>,
    /// Action recommendations raised by this factor.
    pub recommendations: &'static [&'static str],
}

impl FactorOutcome {
    /// A factor evaluation that raised no flag.
    #[must_use]
    pub const fn unflagged(name: &'static str, normalized_value: f64, weight: f64) -> Self {
        Self {
            factor: RiskFactor {
                name,
                normalized_value,
                weight,
            },
            flag: None,
            recommendations: &[],
        }
    }

    /// A factor evaluation that raised a flag and zero or more recommendations.
    #[must_use]
    pub const fn flagged(
        name: &'static str,
        normalized_value: f64,
        weight: f64,
        flag: &'static str,
        recommendations: &'static [&'static str],
    ) -> Self {
        Self {
            factor: RiskFactor {
                name,
                normalized_value,
                weight,
            },
            flag: Some(flag),
            recommendations,
        }
    }
}

/// Combine factor outcomes into a single clamped score.
#[must_use]
pub fn weighted_score(outcomes: &[FactorOutcome]) -> f64 {
    let sum: f64 = outcomes.iter().map(|o| o.factor.contribution()).sum();
    sum.clamp(0.0, 1.0)
}
