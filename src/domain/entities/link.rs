//! ShortLink entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with metadata.
///
/// Represents the mapping between a short code and a long URL. A link is
/// created once, its `clicks` counter is bumped by the resolution path, and
/// it is never deleted: entries past `expires_at` become inert for redirects
/// but remain queryable for statistics, and their codes are never recycled.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ShortLink {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub clicks: i64,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        code: String,
        long_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        clicks: i64,
    ) -> Self {
        Self {
            id,
            code,
            long_url,
            created_at,
            expires_at,
            clicks,
        }
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expired_at(Utc::now())
    }

    /// Strict comparison: a link is still active at exactly `expires_at`.
    fn expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Input data for creating a new link.
///
/// Invariant: `expires_at > created_at`. Both timestamps are fixed by the
/// service at creation time and immutable afterwards.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
