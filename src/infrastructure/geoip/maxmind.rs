//! MaxMind GeoLite2 database lookup.

use crate::domain::geo::{GeoInfo, GeoLocator};
use async_trait::async_trait;
use maxminddb::Reader;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::trace;

/// Geolocation backed by a local GeoLite2-City.mmdb file.
pub struct MaxMindGeoLocator {
    reader: Arc<Reader<Vec<u8>>>,
}

impl MaxMindGeoLocator {
    /// Opens the database file at `path`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the file is missing or not a valid
    /// MaxMind database.
    pub fn open(path: &str) -> Result<Self, maxminddb::MaxMindDbError> {
        let reader = Reader::open_readfile(path)?;
        Ok(Self {
            reader: Arc::new(reader),
        })
    }
}

#[async_trait]
impl GeoLocator for MaxMindGeoLocator {
    async fn lookup(&self, ip: &str) -> Option<GeoInfo> {
        let ip_addr: IpAddr = ip.parse().ok()?;

        let result = self.reader.lookup(ip_addr).ok()?;
        let city: maxminddb::geoip2::City = result.decode().ok()??;

        let country = city.country.iso_code.map(String::from);
        let region = city
            .subdivisions
            .first()
            .and_then(|subdivision| subdivision.names.english.map(String::from));
        let city_name = city.city.names.english.map(String::from);

        trace!(ip, ?country, ?region, ?city_name, "MaxMind lookup");

        Some(GeoInfo {
            country,
            region,
            city: city_name,
        })
    }

    fn name(&self) -> &'static str {
        "maxmind"
    }
}
