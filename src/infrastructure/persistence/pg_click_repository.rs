//! PostgreSQL implementation of [`ClickRepository`].

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

/// PostgreSQL-backed append-only click event log.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository backed by the given connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let click = sqlx::query_as::<_, Click>(
            r#"
            INSERT INTO link_clicks (link_id, clicked_at, referrer, ip, country, region, city)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, link_id, clicked_at, referrer, ip, country, region, city
            "#,
        )
        .bind(new_click.link_id)
        .bind(new_click.clicked_at)
        .bind(&new_click.referrer)
        .bind(&new_click.ip)
        .bind(&new_click.geo.country)
        .bind(&new_click.geo.region)
        .bind(&new_click.geo.city)
        .fetch_one(&*self.pool)
        .await?;

        Ok(click)
    }

    async fn list_by_link(&self, link_id: i64) -> Result<Vec<Click>, AppError> {
        let clicks = sqlx::query_as::<_, Click>(
            r#"
            SELECT id, link_id, clicked_at, referrer, ip, country, region, city
            FROM link_clicks
            WHERE link_id = $1
            ORDER BY clicked_at DESC, id DESC
            "#,
        )
        .bind(link_id)
        .fetch_all(&*self.pool)
        .await?;

        Ok(clicks)
    }
}
