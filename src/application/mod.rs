//! Application layer containing business logic services.
//!
//! Services orchestrate domain entities and repositories to fulfil the
//! use cases of the service: creating short links, resolving them with
//! click capture, and reading statistics.

pub mod services;
