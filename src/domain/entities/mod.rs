//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A shortcode to long URL mapping with expiry and counter
//! - [`Click`] - A single recorded visit on a shortened link
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewShortLink` and `NewClick` carry the caller-supplied fields, the entity
//! structs mirror the persisted rows.

pub mod click;
pub mod link;

pub use click::{Click, NewClick};
pub use link::{NewShortLink, ShortLink};
