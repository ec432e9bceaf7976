//! Driven ports: interfaces the engine consumes.

mod geolocation_port;
mod history_store_port;

pub use geolocation_port::{GeolocationPort, StaticGeolocation};
pub use history_store_port::{HistoryStoreError, HistoryStorePort};
