//! Utility functions for code generation and request handling.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`request_meta`] - Referrer and client IP extraction from requests

pub mod code_generator;
pub mod request_meta;
