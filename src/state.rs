//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};

/// Shared application state.
///
/// Services are behind `Arc` so cloning the state per request is cheap and
/// tests can wire in alternative repository implementations.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub stats_service: Arc<StatsService>,
    /// Name of the active geolocation provider, reported by the health check.
    pub geo_provider: &'static str,
    /// Public base URL short links are built from, without a trailing slash.
    base_url: String,
}

impl AppState {
    /// Creates new application state.
    pub fn new(
        link_service: Arc<LinkService>,
        stats_service: Arc<StatsService>,
        geo_provider: &'static str,
        base_url: String,
    ) -> Self {
        Self {
            link_service,
            stats_service,
            geo_provider,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the fully qualified short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
