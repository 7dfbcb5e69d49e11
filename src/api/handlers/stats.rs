//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns metadata and the full click history of a short link.
///
/// # Endpoint
///
/// `GET /shorturls/{code}`
///
/// Reads never mutate state; expired links still report their statistics.
///
/// # Response
///
/// ```json
/// {
///   "shortcode": "abc1234",
///   "url": "https://example.com/some/long/path",
///   "createdAt": "2025-01-01T12:00:00Z",
///   "expiry": "2025-01-01T12:30:00Z",
///   "totalClicks": 2,
///   "clicks": [
///     {
///       "timestamp": "2025-01-01T12:05:00Z",
///       "referrer": "https://news.example.org",
///       "geo": { "country": "DE", "city": "Berlin" }
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 if the code does not exist.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.get_stats(&code).await?;

    Ok(Json(StatsResponse {
        shortcode: stats.link.code,
        url: stats.link.long_url,
        created_at: stats.link.created_at,
        expiry: stats.link.expires_at,
        total_clicks: stats.link.clicks,
        clicks: stats.clicks.into_iter().map(Into::into).collect(),
    }))
}
