//! ipapi.co geolocation adapter.
//!
//! Location lookups go over HTTP with a bounded timeout; failures of any
//! kind degrade to the unknown-location default. Reputation is a local
//! heuristic and never leaves the process.

use std::net::IpAddr;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::GeolocationPort;
use crate::config::GeolocationConfig;
use crate::domain::geo::{GeoLocation, GeoLookup, IpReputation};

/// Geolocation collaborator backed by the ipapi.co free tier.
#[derive(Debug, Clone)]
pub struct IpApiGeolocationAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl IpApiGeolocationAdapter {
    /// Create the adapter; the lookup timeout is enforced on the underlying
    /// client.
    pub fn new(config: &GeolocationConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch(&self, ip_address: &str) -> Result<IpApiResponse, reqwest::Error> {
        self.client
            .get(format!("{}/{}/json/", self.base_url, ip_address))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[async_trait]
impl GeolocationPort for IpApiGeolocationAdapter {
    async fn locate(&self, ip_address: &str) -> GeoLookup {
        match self.fetch(ip_address).await {
            Ok(response) => GeoLookup {
                location: response.into_location(),
                degraded: false,
            },
            Err(error) => {
                tracing::warn!(
                    ip_address = %ip_address,
                    error = %error,
                    "Geolocation lookup failed"
                );
                GeoLookup {
                    location: GeoLocation::unknown(),
                    degraded: true,
                }
            }
        }
    }

    async fn reputation(&self, ip_address: &str) -> IpReputation {
        if is_private_or_loopback(ip_address) {
            IpReputation::clean(IpReputation::TRUSTED_SCORE)
        } else {
            IpReputation::neutral()
        }
    }
}

/// Private and loopback sources get elevated trust; anything else,
/// including unparsable input, is neutral.
fn is_private_or_loopback(ip_address: &str) -> bool {
    ip_address.parse::<IpAddr>().is_ok_and(|addr| match addr {
        IpAddr::V4(v4) => v4.is_private() || v4.is_loopback(),
        IpAddr::V6(v6) => v6.is_loopback(),
    })
}

/// Subset of the ipapi.co response the engine consumes.
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    country_name: Option<String>,
    country_code: Option<String>,
    city: Option<String>,
    region: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl IpApiResponse {
    fn into_location(self) -> GeoLocation {
        let unknown = GeoLocation::unknown();
        GeoLocation {
            country: self.country_name.unwrap_or(unknown.country),
            country_code: self.country_code.unwrap_or(unknown.country_code),
            city: self.city.unwrap_or(unknown.city),
            region: self.region.unwrap_or(unknown.region),
            latitude: self.latitude.unwrap_or_default(),
            longitude: self.longitude.unwrap_or_default(),
        }
    }
}
