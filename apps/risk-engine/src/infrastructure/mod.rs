//! Infrastructure layer - Adapters and external integrations.

pub mod geolocation;
pub mod http;
pub mod persistence;
