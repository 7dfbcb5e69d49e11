//! Data Transfer Objects for the HTTP API.
//!
//! Response fields serialize in camelCase to match the public JSON contract
//! (`shortLink`, `createdAt`, `totalClicks`).

pub mod clicks;
pub mod health;
pub mod shorten;
pub mod stats;
pub mod stats_list;
