//! Short link creation and resolution.

use crate::domain::entities::{NewClick, NewShortLink, ShortLink};
use crate::domain::geo::{GeoInfo, GeoLocator};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use chrono::{Duration, Utc};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

/// Validity applied when the caller does not specify one, in minutes.
const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Upper bound on requested validity, in minutes (60 days).
const MAX_VALIDITY_MINUTES: i64 = 86_400;

/// How many generated codes to try before giving up on a creation.
const MAX_GENERATION_ATTEMPTS: u32 = 5;

/// Service for creating short links and resolving them at redirect time.
///
/// Creation validates input, picks or accepts a code, and claims it with an
/// atomic insert. Resolution is the hot path: it looks up the code, checks
/// expiry, captures a click event and returns the target URL.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    clicks: Arc<dyn ClickRepository>,
    geo: Arc<dyn GeoLocator>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        links: Arc<dyn LinkRepository>,
        clicks: Arc<dyn ClickRepository>,
        geo: Arc<dyn GeoLocator>,
    ) -> Self {
        Self { links, clicks, geo }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// * `url` - Target URL, required, must be absolute http(s)
    /// * `validity` - Lifetime in minutes, 1..=86400, defaults to 30
    /// * `shortcode` - Optional custom code; omitted means generate one
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if any input fails validation
    /// - [`AppError::Conflict`] if a custom code is already taken
    /// - [`AppError::Internal`] if five generated codes collide in a row,
    ///   or on storage errors
    pub async fn create_short_link(
        &self,
        url: Option<String>,
        validity: Option<i64>,
        shortcode: Option<String>,
    ) -> Result<ShortLink, AppError> {
        let long_url = validate_url(url)?;
        let validity_minutes = validate_validity(validity)?;

        let created_at = Utc::now();
        let expires_at = created_at + Duration::minutes(validity_minutes);

        if let Some(code) = shortcode {
            validate_custom_code(&code)?;

            // A custom code gets exactly one attempt. Conflict means the
            // caller must pick another code, not that we retry for them.
            let link = self
                .links
                .insert(NewShortLink {
                    code,
                    long_url,
                    created_at,
                    expires_at,
                })
                .await?;

            info!(code = %link.code, "Created short link with custom code");

            return Ok(link);
        }

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = generate_code();

            match self
                .links
                .insert(NewShortLink {
                    code,
                    long_url: long_url.clone(),
                    created_at,
                    expires_at,
                })
                .await
            {
                Ok(link) => {
                    info!(code = %link.code, attempt, "Created short link");
                    return Ok(link);
                }
                Err(AppError::Conflict { .. }) => {
                    warn!(attempt, "Generated code collided, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Could not allocate a unique shortcode",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }

    /// Resolves a short code at redirect time.
    ///
    /// On success a click event has been recorded and the counter bumped
    /// before the target URL is returned, so statistics read after a
    /// redirect always include that redirect. A failure to bump the counter
    /// is logged and does not block the redirect; a failure to record the
    /// click event does.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the code does not exist
    /// - [`AppError::Gone`] if the link has expired (no click is recorded)
    /// - [`AppError::Internal`] on storage errors
    pub async fn resolve(
        &self,
        code: &str,
        referrer: Option<String>,
        ip: Option<String>,
    ) -> Result<String, AppError> {
        let link = self
            .links
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Shortcode not found", json!({ "code": code })))?;

        if link.is_expired() {
            return Err(AppError::gone(
                "Short link has expired",
                json!({ "code": code, "expiredAt": link.expires_at }),
            ));
        }

        let geo = match &ip {
            Some(ip) => self.geo.lookup(ip).await.unwrap_or_default(),
            None => GeoInfo::default(),
        };

        self.clicks
            .record(NewClick {
                link_id: link.id,
                clicked_at: Utc::now(),
                referrer,
                ip,
                geo,
            })
            .await?;

        if let Err(e) = self.links.increment_clicks(link.id).await {
            warn!(code = %link.code, error = %e, "Failed to bump click counter");
        }

        Ok(link.long_url)
    }
}

/// Validates the target URL: required, parseable, absolute http(s).
fn validate_url(url: Option<String>) -> Result<String, AppError> {
    let raw = url
        .ok_or_else(|| AppError::bad_request("\"url\" is required", json!({ "field": "url" })))?;

    let parsed = Url::parse(&raw).map_err(|_| {
        AppError::bad_request("\"url\" must be a valid absolute URL", json!({ "url": raw }))
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AppError::bad_request(
            "\"url\" must use the http or https scheme",
            json!({ "url": raw, "scheme": parsed.scheme() }),
        ));
    }

    Ok(raw)
}

/// Validates the validity window, applying the default when absent.
fn validate_validity(validity: Option<i64>) -> Result<i64, AppError> {
    match validity {
        None => Ok(DEFAULT_VALIDITY_MINUTES),
        Some(minutes) if (1..=MAX_VALIDITY_MINUTES).contains(&minutes) => Ok(minutes),
        Some(minutes) => Err(AppError::bad_request(
            "\"validity\" must be an integer between 1 and 86400 minutes",
            json!({ "validity": minutes }),
        )),
    }
}
