//! Risk Engine Binary
//!
//! Starts the risk assessment service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin risk-engine
//! ```
//!
//! # Environment Variables
//!
//! All optional:
//! - `HTTP_PORT`: HTTP server port (default: 8000)
//! - `BIND_ADDRESS`: Bind address (default: 0.0.0.0)
//! - `AUTH_TOKEN`: Expected bearer token; any non-empty token is accepted
//!   when unset
//! - `GEOLOCATION_URL`: Base URL of the IP geolocation service
//!   (default: <https://ipapi.co>)
//! - `GEOLOCATION_TIMEOUT_SECS`: Lookup timeout (default: 5)
//! - `HISTORY_MAX_ENTRIES`: Retained window size per user (default: 20)
//! - `HISTORY_TTL_DAYS`: Window expiry in days (default: 30)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use risk_engine::application::use_cases::{
    EvaluateTransactionUseCase, EvaluateUserUseCase, ReportStatsUseCase,
};
use risk_engine::config::Config;
use risk_engine::domain::assessment::RiskThresholds;
use risk_engine::infrastructure::geolocation::IpApiGeolocationAdapter;
use risk_engine::infrastructure::http::{AppState, create_router};
use risk_engine::infrastructure::persistence::InMemoryHistoryStore;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting Risk Engine");

    let config = Config::from_env();
    log_config(&config);

    let geolocation = Arc::new(IpApiGeolocationAdapter::new(&config.geolocation)?);
    let history = Arc::new(InMemoryHistoryStore::new(config.history.clone()));
    let thresholds = RiskThresholds::DEFAULT;

    let state = AppState {
        evaluate_user: Arc::new(EvaluateUserUseCase::new(geolocation, thresholds)),
        evaluate_transaction: Arc::new(EvaluateTransactionUseCase::new(
            Arc::clone(&history),
            thresholds,
        )),
        report_stats: Arc::new(ReportStatsUseCase::new(history, thresholds)),
    };
    let app = create_router(state, config.auth.clone());

    let addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.http_port).parse()?;

    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /evaluate-user");
    tracing::info!("  POST /evaluate-transaction");
    tracing::info!("  GET  /risk-stats/{{user_id}}");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Risk engine stopped");
    Ok(())
}

/// Load .env file from the current directory, if present.
fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses static directive strings that are compile-time constants guaranteed
/// to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "risk_engine=info"
                    .parse()
                    .expect("static directive 'risk_engine=info' is valid"),
            ),
        )
        .init();
}

/// Log the parsed configuration.
fn log_config(config: &Config) {
    tracing::info!(
        http_port = config.server.http_port,
        auth_token_configured = config.auth.expected_token.is_some(),
        geolocation_url = %config.geolocation.base_url,
        history_max_entries = config.history.max_entries,
        history_ttl_days = config.history.ttl_days,
        "Configuration loaded"
    );
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed; failing fast at startup
/// beats a process that cannot respond to termination signals.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
