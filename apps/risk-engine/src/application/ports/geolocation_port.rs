//! Geolocation/Reputation Port (Driven Port)
//!
//! Interface to the external IP intelligence collaborator. Both operations
//! are best-effort and infallible at this boundary: a failed lookup resolves
//! to defaults carrying a degraded marker instead of an error.

use async_trait::async_trait;

use crate::domain::geo::{GeoLocation, GeoLookup, IpReputation};

/// Port for IP location and reputation resolution.
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    /// Resolve location metadata for an IP address.
    ///
    /// Never fails; on lookup failure the result carries
    /// [`GeoLocation::unknown`] and `degraded = true`.
    async fn locate(&self, ip_address: &str) -> GeoLookup;

    /// Assess the reputation of an IP address.
    ///
    /// Never fails; unknown addresses resolve to the neutral score and
    /// private or loopback addresses to the elevated trust score.
    async fn reputation(&self, ip_address: &str) -> IpReputation;
}

/// Fixed-response implementation for tests and offline operation.
#[derive(Debug, Clone)]
pub struct StaticGeolocation {
    reputation: IpReputation,
    location: GeoLocation,
}

impl StaticGeolocation {
    /// Collaborator that answers every lookup with the given reputation and
    /// an unknown location.
    #[must_use]
    pub fn with_reputation(reputation: IpReputation) -> Self {
        Self {
            reputation,
            location: GeoLocation::unknown(),
        }
    }

    /// Collaborator answering with neutral reputation and unknown location.
    #[must_use]
    pub fn neutral() -> Self {
        Self::with_reputation(IpReputation::neutral())
    }
}

#[async_trait]
impl GeolocationPort for StaticGeolocation {
    async fn locate(&self, _ip_address: &str) -> GeoLookup {
        GeoLookup {
            location: self.location.clone(),
            degraded: false,
        }
    }

    async fn reputation(&self, _ip_address: &str) -> IpReputation {
        self.reputation
    }
}
