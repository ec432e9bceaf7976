//! Geolocation collaborator adapters.

mod ipapi;

pub use ipapi::IpApiGeolocationAdapter;
