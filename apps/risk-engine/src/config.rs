//! Configuration for the risk engine.
//!
//! Loaded once at process start from environment variables; every section
//! has working defaults so the service runs with no configuration at all.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Bearer-token authentication configuration.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Geolocation collaborator configuration.
    #[serde(default)]
    pub geolocation: GeolocationConfig,
    /// History store windowing configuration.
    #[serde(default)]
    pub history: HistoryConfig,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                http_port: env_parsed("HTTP_PORT", default_http_port()),
                bind_address: std::env::var("BIND_ADDRESS")
                    .unwrap_or_else(|_| default_bind_address()),
            },
            auth: AuthConfig {
                expected_token: std::env::var("AUTH_TOKEN").ok().filter(|t| !t.is_empty()),
            },
            geolocation: GeolocationConfig {
                base_url: std::env::var("GEOLOCATION_URL")
                    .unwrap_or_else(|_| default_geolocation_url()),
                timeout_secs: env_parsed("GEOLOCATION_TIMEOUT_SECS", default_geo_timeout_secs()),
            },
            history: HistoryConfig {
                max_entries: env_parsed("HISTORY_MAX_ENTRIES", default_max_entries()),
                ttl_days: env_parsed("HISTORY_TTL_DAYS", default_ttl_days()),
            },
        }
    }
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server port for REST endpoints.
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// Bind address.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
            bind_address: default_bind_address(),
        }
    }
}

/// Bearer-token authentication configuration.
///
/// When no expected token is configured, any non-empty bearer token is
/// accepted; configuring one requires an exact match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The token presented credentials must match, if set.
    #[serde(default)]
    pub expected_token: Option<String>,
}

/// Geolocation collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeolocationConfig {
    /// Base URL of the IP geolocation service.
    #[serde(default = "default_geolocation_url")]
    pub base_url: String,
    /// Bounded lookup timeout in seconds.
    #[serde(default = "default_geo_timeout_secs")]
    pub timeout_secs: u64,
}

impl GeolocationConfig {
    /// Lookup timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            base_url: default_geolocation_url(),
            timeout_secs: default_geo_timeout_secs(),
        }
    }
}

/// History store windowing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Most-recent entries retained per user.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    /// Days of inactivity after which a user's window expires.
    #[serde(default = "default_ttl_days")]
    pub ttl_days: i64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            ttl_days: default_ttl_days(),
        }
    }
}

const fn default_http_port() -> u16 {
    8000
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_geolocation_url() -> String {
    "https://ipapi.co".to_string()
}

const fn default_geo_timeout_secs() -> u64 {
    5
}

const fn default_max_entries() -> usize {
    20
}

const fn default_ttl_days() -> i64 {
    30
}
