//! Domain layer containing business entities and contracts.
//!
//! This module defines entities, repository interfaces, and the geolocation
//! capability independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`geo`] - IP geolocation capability trait
//!
//! # Design Principles
//!
//! - The domain layer has no dependencies on infrastructure or presentation
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod geo;
pub mod repositories;
