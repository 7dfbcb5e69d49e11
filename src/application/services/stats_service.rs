//! Per-link statistics and link listing.

use crate::domain::entities::{Click, ShortLink};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// A link together with its click event history, newest first.
#[derive(Debug, Clone)]
pub struct LinkWithClicks {
    pub link: ShortLink,
    pub clicks: Vec<Click>,
}

/// Read-side service for statistics endpoints.
///
/// Reads never mutate state: fetching statistics for an expired link works
/// and does not change its counters.
pub struct StatsService {
    links: Arc<dyn LinkRepository>,
    clicks: Arc<dyn ClickRepository>,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(links: Arc<dyn LinkRepository>, clicks: Arc<dyn ClickRepository>) -> Self {
        Self { links, clicks }
    }

    /// Fetches a link and its full click history.
    ///
    /// Expired links still resolve here; expiry only gates redirects.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the code does not exist
    /// - [`AppError::Internal`] on storage errors
    pub async fn get_stats(&self, code: &str) -> Result<LinkWithClicks, AppError> {
        let link = self
            .links
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Shortcode not found", json!({ "code": code })))?;

        let clicks = self.clicks.list_by_link(link.id).await?;

        Ok(LinkWithClicks { link, clicks })
    }

    /// Lists every link, newest-created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_links(&self) -> Result<Vec<ShortLink>, AppError> {
        self.links.list_all().await
    }

    /// Counts all links. Used by the health check to probe storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.links.count().await
    }
}
