//! Evaluate User Use Case
//!
//! Scores a user profile against the six user risk factors. Stateless and
//! side-effect free: identical input with a fixed collaborator yields an
//! identical assessment.

use std::sync::Arc;

use crate::application::ports::GeolocationPort;
use crate::domain::assessment::{RiskAssessment, RiskThresholds};
use crate::domain::signals::UserRiskSignal;
use crate::domain::user::{USER_CONFIDENCE, evaluate_user_factors};

/// Scores user profiles.
pub struct EvaluateUserUseCase<G: GeolocationPort> {
    geolocation: Arc<G>,
    thresholds: RiskThresholds,
}

impl<G: GeolocationPort> EvaluateUserUseCase<G> {
    /// Create the use case with its collaborator and the process-wide
    /// threshold table.
    pub fn new(geolocation: Arc<G>, thresholds: RiskThresholds) -> Self {
        Self {
            geolocation,
            thresholds,
        }
    }

    /// Produce a risk assessment for the user.
    ///
    /// A missing geolocation override triggers a live lookup; a degraded
    /// lookup never fails the assessment.
    pub async fn execute(&self, signal: &UserRiskSignal) -> RiskAssessment {
        tracing::info!(user_id = %signal.user_id, "Evaluating user risk");

        if signal.geolocation.is_none() {
            let lookup = self.geolocation.locate(&signal.ip_address).await;
            if lookup.degraded {
                tracing::warn!(
                    ip_address = %signal.ip_address,
                    "Geolocation lookup degraded, using defaults"
                );
            } else {
                tracing::debug!(
                    ip_address = %signal.ip_address,
                    country = %lookup.location.country,
                    city = %lookup.location.city,
                    "Resolved user location"
                );
            }
        }

        let reputation = self.geolocation.reputation(&signal.ip_address).await;
        let outcomes = evaluate_user_factors(signal, &reputation);
        let assessment =
            RiskAssessment::from_outcomes(&outcomes, USER_CONFIDENCE, &self.thresholds);

        tracing::info!(
            user_id = %signal.user_id,
            risk_level = ?assessment.risk_level,
            risk_score = assessment.risk_score,
            "User risk evaluation completed"
        );

        assessment
    }
}
