//! DTOs for click event data.

use serde::Serialize;

use crate::domain::entities::Click;
use chrono::{DateTime, Utc};

/// Individual click event as exposed by the statistics endpoint.
///
/// The captured IP stays internal; only the derived geo fields are exposed.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,

    pub geo: GeoDto,
}

/// Coarse location derived from the client IP. All fields may be absent.
#[derive(Debug, Serialize)]
pub struct GeoDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl From<Click> for ClickInfo {
    fn from(click: Click) -> Self {
        Self {
            timestamp: click.clicked_at,
            referrer: click.referrer,
            geo: GeoDto {
                country: click.country,
                region: click.region,
                city: click.city,
            },
        }
    }
}
