//! IP geolocation providers.
//!
//! The active provider is chosen at startup: a configured and readable
//! MaxMind GeoLite2 database enables [`MaxMindGeoLocator`], anything else
//! falls back to [`NullGeoLocator`] and clicks carry no geo fields.

pub mod maxmind;
pub mod null;

pub use maxmind::MaxMindGeoLocator;
pub use null::NullGeoLocator;

use crate::domain::geo::GeoLocator;
use std::sync::Arc;
use tracing::{info, warn};

/// Selects a geolocation provider from the configured database path.
///
/// Lookup failures at runtime degrade to `None` either way, so a missing
/// or unreadable database only costs the geo enrichment, never requests.
pub fn from_config(mmdb_path: Option<&str>) -> Arc<dyn GeoLocator> {
    let locator: Arc<dyn GeoLocator> = match mmdb_path {
        Some(path) => match MaxMindGeoLocator::open(path) {
            Ok(locator) => {
                info!(path, "GeoIP: using MaxMind database");
                Arc::new(locator)
            }
            Err(e) => {
                warn!(path, error = %e, "GeoIP: failed to open MaxMind database, geolocation disabled");
                Arc::new(NullGeoLocator)
            }
        },
        None => {
            info!("GeoIP: no database configured, geolocation disabled");
            Arc::new(NullGeoLocator)
        }
    };

    info!(provider = locator.name(), "GeoIP: initialized");
    locator
}
