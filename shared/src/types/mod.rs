//! Type definitions module
//!
//! - `common` - Coordinates for location-based features
//! - `language` - Wizard display languages

pub mod common;
pub mod language;

pub use common::Coordinate;
pub use language::Language;
