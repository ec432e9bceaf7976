//! Geolocation and IP reputation value objects.
//!
//! These are the shapes the geolocation collaborator resolves to. Lookup
//! failure never surfaces as an error; it degrades to the documented
//! defaults and is marked as such on [`GeoLookup`].

use serde::{Deserialize, Serialize};

/// Location metadata for an IP address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Country name, `"Unknown"` when unresolved.
    #[serde(default = "unknown")]
    pub country: String,
    /// ISO country code, `"XX"` when unresolved.
    #[serde(default = "unknown_code")]
    pub country_code: String,
    /// City, `"Unknown"` when unresolved.
    #[serde(default = "unknown")]
    pub city: String,
    /// Region, `"Unknown"` when unresolved.
    #[serde(default = "unknown")]
    pub region: String,
    /// Latitude, `0.0` when unresolved.
    #[serde(default)]
    pub latitude: f64,
    /// Longitude, `0.0` when unresolved.
    #[serde(default)]
    pub longitude: f64,
}

impl GeoLocation {
    /// The degraded default returned when a lookup fails.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            country: unknown(),
            country_code: unknown_code(),
            city: unknown(),
            region: unknown(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

fn unknown() -> String {
    "Unknown".to_string()
}

fn unknown_code() -> String {
    "XX".to_string()
}

/// Result of a best-effort location lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLookup {
    /// Resolved or default location.
    pub location: GeoLocation,
    /// True when the lookup failed and defaults were substituted.
    pub degraded: bool,
}

/// IP reputation: threat flags plus a trust score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IpReputation {
    /// Known Tor exit node.
    pub is_tor: bool,
    /// Known VPN endpoint.
    pub is_vpn: bool,
    /// Known open proxy.
    pub is_proxy: bool,
    /// Known malicious source.
    pub is_malicious: bool,
    /// Trust score in `[0, 1]`; higher is more trustworthy.
    pub reputation_score: f64,
}

impl IpReputation {
    /// Neutral score assumed when nothing is known about an address.
    pub const NEUTRAL_SCORE: f64 = 0.5;

    /// Elevated trust assigned to private and loopback addresses.
    pub const TRUSTED_SCORE: f64 = 0.8;

    /// Reputation with no threat flags and the given score.
    #[must_use]
    pub const fn clean(reputation_score: f64) -> Self {
        Self {
            is_tor: false,
            is_vpn: false,
            is_proxy: false,
            is_malicious: false,
            reputation_score,
        }
    }

    /// The neutral default used on lookup failure.
    #[must_use]
    pub const fn neutral() -> Self {
        Self::clean(Self::NEUTRAL_SCORE)
    }
}
