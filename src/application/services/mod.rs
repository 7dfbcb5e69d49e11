//! Application services implementing business use cases.
//!
//! - [`LinkService`] - Short link creation and redirect-time resolution
//! - [`StatsService`] - Per-link statistics and link listing

pub mod link_service;
pub mod stats_service;

pub use link_service::LinkService;
pub use stats_service::{LinkWithClicks, StatsService};
