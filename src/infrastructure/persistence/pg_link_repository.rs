//! PostgreSQL implementation of [`LinkRepository`].

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

/// PostgreSQL-backed shortcode store.
///
/// Uniqueness of `code` rests on the `links_code_key` unique constraint;
/// `insert` surfaces its violation as [`AppError::Conflict`], which is what
/// makes concurrent creations of the same code safe.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository backed by the given connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let link = sqlx::query_as::<_, ShortLink>(
            r#"
            INSERT INTO links (code, long_url, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, code, long_url, created_at, expires_at, clicks
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.long_url)
        .bind(new_link.created_at)
        .bind(new_link.expires_at)
        .fetch_one(&*self.pool)
        .await?;

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let link = sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT id, code, long_url, created_at, expires_at, clicks
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(link)
    }

    async fn increment_clicks(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("UPDATE links SET clicks = clicks + 1 WHERE id = $1")
            .bind(id)
            .execute(&*self.pool)
            .await?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ShortLink>, AppError> {
        let links = sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT id, code, long_url, created_at, expires_at, clicks
            FROM links
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(links)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM links")
            .fetch_one(&*self.pool)
            .await?;

        Ok(count.0)
    }
}
