//! HTTP API layer.
//!
//! - [`dto`] - Request and response types
//! - [`handlers`] - Endpoint handlers
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
