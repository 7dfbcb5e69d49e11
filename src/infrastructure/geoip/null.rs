//! No-op geolocation used when no database is configured.

use crate::domain::geo::{GeoInfo, GeoLocator};
use async_trait::async_trait;

/// Locator that never resolves anything. Clicks recorded with it carry
/// empty geo fields, which the statistics surface tolerates.
pub struct NullGeoLocator;

#[async_trait]
impl GeoLocator for NullGeoLocator {
    async fn lookup(&self, _ip: &str) -> Option<GeoInfo> {
        None
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}
