//! Handler for the link listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::stats_list::LinkSummary;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every short link, newest-created first.
///
/// # Endpoint
///
/// `GET /shorturls`
///
/// Returns a bare JSON array of link summaries. Expired links are included;
/// expiry only gates redirects.
pub async fn stats_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkSummary>>, AppError> {
    let links = state.stats_service.list_links().await?;

    let items = links
        .into_iter()
        .map(|link| LinkSummary {
            short_link: state.short_url(&link.code),
            shortcode: link.code,
            url: link.long_url,
            created_at: link.created_at,
            expiry: link.expires_at,
            total_clicks: link.clicks,
        })
        .collect();

    Ok(Json(items))
}
