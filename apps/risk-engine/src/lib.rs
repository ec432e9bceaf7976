// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Risk Engine - Rust Core Library
//!
//! Deterministic risk assessment engine for asset tokenization. Scores
//! users and individual transactions against weighted rule-based factors,
//! classifies them into risk tiers, and maintains a bounded, time-windowed
//! transaction history per user for frequency signals and trend reporting.
//!
//! # Architecture (Hexagonal)
//!
//! - **Domain**: Pure scoring logic
//!   - `factors`: weighted factor model, score aggregation
//!   - `user` / `transaction`: per-path factor evaluation
//!   - `assessment`: classification thresholds, flag/recommendation emission
//!   - `history`: the persisted transaction outcome record
//!
//! - **Application**: Use cases and port definitions
//!   - `ports`: `GeolocationPort`, `HistoryStorePort`
//!   - `use_cases`: `EvaluateUser`, `EvaluateTransaction`, `ReportStats`
//!
//! - **Infrastructure**: Adapters
//!   - `geolocation`: ipapi.co lookup with bounded timeout and graceful
//!     degradation
//!   - `persistence`: in-memory history store with atomic
//!     append-trim-expire writes
//!   - `http`: axum REST API with bearer-token auth

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - Core scoring logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loading.
pub mod config;

/// Structured error types.
pub mod error;

// Domain re-exports
pub use domain::{
    FactorOutcome, GeoLocation, GeoLookup, HistoryRecord, IpReputation, KycStatus, RiskAssessment,
    RiskFactor, RiskLevel, RiskThresholds, TransactionRiskSignal, UserRiskSignal,
};

// Application re-exports
pub use application::ports::{
    GeolocationPort, HistoryStoreError, HistoryStorePort, StaticGeolocation,
};
pub use application::use_cases::{
    EvaluateTransactionUseCase, EvaluateUserUseCase, ReportStatsUseCase, RiskStats, RiskTrend,
};

// Infrastructure re-exports
pub use infrastructure::geolocation::IpApiGeolocationAdapter;
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::InMemoryHistoryStore;
