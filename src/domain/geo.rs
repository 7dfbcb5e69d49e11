//! IP geolocation capability.
//!
//! The lookup is an injected capability so the link service can be tested
//! with deterministic fakes. Implementations live in
//! [`crate::infrastructure::geoip`].

use async_trait::async_trait;

/// Coarse geolocation for a client IP.
///
/// Any or all fields may be `None`: the lookup may miss, the database may
/// lack the granularity, or no IP may be available at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoInfo {
    /// ISO 3166-1 alpha-2 country code (e.g. "DE", "US").
    pub country: Option<String>,
    /// Subdivision name (state, province, region).
    pub region: Option<String>,
    /// City name.
    pub city: Option<String>,
}

/// IP to location lookup.
///
/// Lookup failures of any kind degrade to `None`; they are never surfaced as
/// request errors and must not block click recording.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeoLocator: Send + Sync {
    /// Resolves an IP address string to a coarse location.
    async fn lookup(&self, ip: &str) -> Option<GeoInfo>;

    /// Provider name, used for logging and the health endpoint.
    fn name(&self) -> &'static str;
}
