//! Repository trait for the append-only click event log.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recording and reading click events.
///
/// The log is append-only: events are created exactly once per successful
/// resolution and never updated or deleted. Many events reference one link.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends one click event with its geo fields already resolved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Lists the click events of a link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_by_link(&self, link_id: i64) -> Result<Vec<Click>, AppError>;
}
