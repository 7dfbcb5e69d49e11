//! DTOs for detailed link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;

/// Detailed statistics for a specific short link.
///
/// Includes link metadata, the lifetime click count, and the full click
/// history, newest first.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub shortcode: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub total_clicks: i64,
    pub clicks: Vec<ClickInfo>,
}
