//! Infrastructure layer with concrete adapters for external systems.
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`geoip`] - MaxMind-backed IP geolocation

pub mod geoip;
pub mod persistence;
