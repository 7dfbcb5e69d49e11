//! HTTP endpoint handlers.
//!
//! - [`shorten`] - Short link creation
//! - [`redirect`] - Redirect-time resolution with click capture
//! - [`stats`] - Per-link statistics
//! - [`stats_list`] - Link listing
//! - [`health`] - Service health

pub mod health;
pub mod redirect;
pub mod shorten;
pub mod stats;
pub mod stats_list;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
pub use stats_list::stats_list_handler;
