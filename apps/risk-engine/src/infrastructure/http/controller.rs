//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to application use cases.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State},
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use crate::application::ports::{GeolocationPort, HistoryStorePort};
use crate::application::use_cases::{
    EvaluateTransactionUseCase, EvaluateUserUseCase, ReportStatsUseCase, RiskStats,
};
use crate::config::AuthConfig;
use crate::domain::signals::{TransactionRiskSignal, UserRiskSignal};
use crate::error::EngineError;

use super::auth::require_bearer;
use super::response::{HealthResponse, RiskResponse};

/// Application state shared across handlers.
pub struct AppState<G, H>
where
    G: GeolocationPort,
    H: HistoryStorePort,
{
    /// Use case for scoring users.
    pub evaluate_user: Arc<EvaluateUserUseCase<G>>,
    /// Use case for scoring transactions.
    pub evaluate_transaction: Arc<EvaluateTransactionUseCase<H>>,
    /// Use case for per-user statistics.
    pub report_stats: Arc<ReportStatsUseCase<H>>,
}

impl<G, H> Clone for AppState<G, H>
where
    G: GeolocationPort,
    H: HistoryStorePort,
{
    fn clone(&self) -> Self {
        Self {
            evaluate_user: Arc::clone(&self.evaluate_user),
            evaluate_transaction: Arc::clone(&self.evaluate_transaction),
            report_stats: Arc::clone(&self.report_stats),
        }
    }
}

/// Create the HTTP router with all endpoints.
///
/// Every route except `/health` sits behind the bearer-token middleware.
pub fn create_router<G, H>(state: AppState<G, H>, auth: AuthConfig) -> Router
where
    G: GeolocationPort + 'static,
    H: HistoryStorePort + 'static,
{
    let protected = Router::new()
        .route("/evaluate-user", post(evaluate_user))
        .route("/evaluate-transaction", post(evaluate_transaction))
        .route("/risk-stats/{user_id}", get(risk_stats))
        .route_layer(middleware::from_fn_with_state(
            Arc::new(auth),
            require_bearer,
        ))
        .with_state(state);

    Router::new()
        .route("/health", get(health_check))
        .merge(protected)
}

/// Health check endpoint, unauthenticated.
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

/// Evaluate a user's risk profile.
async fn evaluate_user<G, H>(
    State(state): State<AppState<G, H>>,
    Json(signal): Json<UserRiskSignal>,
) -> Result<Json<RiskResponse>, EngineError>
where
    G: GeolocationPort,
    H: HistoryStorePort,
{
    if signal.user_id.trim().is_empty() {
        return Err(EngineError::invalid_request("user_id must not be empty"));
    }
    if signal.ip_address.trim().is_empty() {
        return Err(EngineError::invalid_request("ip_address must not be empty"));
    }
    if !signal.total_volume.is_finite() || signal.total_volume < 0.0 {
        return Err(EngineError::invalid_request(
            "total_volume must be a non-negative number",
        ));
    }

    let start = Instant::now();
    let assessment = state.evaluate_user.execute(&signal).await;

    Ok(Json(RiskResponse {
        assessment,
        timestamp: Utc::now(),
        processing_time: start.elapsed().as_secs_f64(),
    }))
}

/// Evaluate a transaction and record it in the user's history window.
async fn evaluate_transaction<G, H>(
    State(state): State<AppState<G, H>>,
    Json(signal): Json<TransactionRiskSignal>,
) -> Result<Json<RiskResponse>, EngineError>
where
    G: GeolocationPort,
    H: HistoryStorePort,
{
    if signal.transaction_id.trim().is_empty() {
        return Err(EngineError::invalid_request(
            "transaction_id must not be empty",
        ));
    }
    if signal.user_id.trim().is_empty() {
        return Err(EngineError::invalid_request("user_id must not be empty"));
    }
    if !signal.amount.is_finite() || signal.amount < 0.0 {
        return Err(EngineError::invalid_request(
            "amount must be a non-negative number",
        ));
    }

    let start = Instant::now();
    let assessment = state.evaluate_transaction.execute(&signal).await;

    Ok(Json(RiskResponse {
        assessment,
        timestamp: Utc::now(),
        processing_time: start.elapsed().as_secs_f64(),
    }))
}

/// Per-user risk statistics over the retained history window.
async fn risk_stats<G, H>(
    State(state): State<AppState<G, H>>,
    Path(user_id): Path<String>,
) -> Result<Json<RiskStats>, EngineError>
where
    G: GeolocationPort,
    H: HistoryStorePort,
{
    let stats = state.report_stats.execute(&user_id).await?;
    Ok(Json(stats))
}
