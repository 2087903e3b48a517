//! # ShapeKit Core
//!
//! Core types, errors, and utilities shared by the ShapeKit crates.
//! Provides the world-space point and box primitives, the lenient numeric
//! parser used for property edits, and the error taxonomy.

pub mod error;
pub mod numeric;
pub mod types;

pub use error::{DesignerError, Error, Result};
pub use numeric::parse_number;
pub use types::{BoundingBox, Point};
