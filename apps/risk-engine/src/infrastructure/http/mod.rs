//! HTTP/REST API adapter.
//!
//! Inbound adapter implementing the REST endpoints that delegate to
//! application use cases. All routes except `/health` require a bearer
//! token.

mod auth;
mod controller;
mod response;

pub use controller::{AppState, create_router};
pub use response::{HealthResponse, RiskResponse};
