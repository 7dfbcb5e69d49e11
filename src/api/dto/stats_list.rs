//! DTOs for the link listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Summary of one link, without its click history.
///
/// The listing endpoint returns a bare JSON array of these, newest-created
/// first. Expired links are included.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSummary {
    pub shortcode: String,
    pub short_link: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub total_clicks: i64,
}
