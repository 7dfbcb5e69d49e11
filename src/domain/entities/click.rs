//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

use crate::domain::geo::GeoInfo;

/// A click event recorded when a shortened link is resolved.
///
/// Captures metadata about each redirect for analytics purposes: the request
/// timestamp, the referrer, the client IP, and the coarse geolocation derived
/// from it. Click events are immutable and never updated or deleted.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub referrer: Option<String>,
    pub ip: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
}

impl Click {
    /// Creates a new Click instance.
    ///
    /// All metadata fields are optional: headers may be absent and the
    /// geolocation lookup may fail or be disabled.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        link_id: i64,
        clicked_at: DateTime<Utc>,
        referrer: Option<String>,
        ip: Option<String>,
        country: Option<String>,
        region: Option<String>,
        city: Option<String>,
    ) -> Self {
        Self {
            id,
            link_id,
            clicked_at,
            referrer,
            ip,
            country,
            region,
            city,
        }
    }
}

/// Input data for recording a new click event.
///
/// The `link_id` must reference an existing link. Geo fields are resolved
/// before the append so the recorder stays a plain write path.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub referrer: Option<String>,
    pub ip: Option<String>,
    pub geo: GeoInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_click_creation_with_all_fields() {
        let now = Utc::now();
        let click = Click::new(
            1,
            42,
            now,
            Some("https://google.com".to_string()),
            Some("203.0.113.7".to_string()),
            Some("US".to_string()),
            Some("California".to_string()),
            Some("Mountain View".to_string()),
        );

        assert_eq!(click.id, 1);
        assert_eq!(click.link_id, 42);
        assert_eq!(click.clicked_at, now);
        assert_eq!(click.referrer, Some("https://google.com".to_string()));
        assert_eq!(click.ip, Some("203.0.113.7".to_string()));
        assert_eq!(click.country, Some("US".to_string()));
        assert_eq!(click.region, Some("California".to_string()));
        assert_eq!(click.city, Some("Mountain View".to_string()));
    }

    #[test]
    fn test_click_creation_minimal() {
        let now = Utc::now();
        let click = Click::new(1, 10, now, None, None, None, None, None);

        assert_eq!(click.link_id, 10);
        assert!(click.referrer.is_none());
        assert!(click.ip.is_none());
        assert!(click.country.is_none());
        assert!(click.region.is_none());
        assert!(click.city.is_none());
    }

    #[test]
    fn test_new_click_creation() {
        let new_click = NewClick {
            link_id: 99,
            clicked_at: Utc::now(),
            referrer: None,
            ip: Some("10.0.0.1".to_string()),
            geo: GeoInfo::default(),
        };

        assert_eq!(new_click.link_id, 99);
        assert!(new_click.referrer.is_none());
        assert!(new_click.ip.is_some());
        assert!(new_click.geo.country.is_none());
    }
}
