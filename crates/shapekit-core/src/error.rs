//! Error handling for ShapeKit
//!
//! Provides error types for the layers of the editor:
//! - Designer errors (shape factory, property edits)
//! - Requests that do not fit the editor's current state
//!
//! Property edits coming from the UI never surface these to the user; the
//! editor logs them and keeps the previous value. They exist so library
//! callers can tell why an edit had no effect.

use thiserror::Error;

/// Designer error type
///
/// Represents rejected shape creation or property edit requests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignerError {
    /// The requested shape kind is not one of rectangle, circle, triangle
    #[error("Unknown shape type: {0}")]
    UnknownShapeType(String),

    /// The property name is not recognized by any shape
    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    /// The property exists but not on this kind of shape
    #[error("Property '{property}' does not apply to a {kind}")]
    PropertyNotApplicable {
        /// The property that was edited.
        property: String,
        /// The kind of the shape being edited.
        kind: String,
    },

    /// The value could not be parsed as a number
    #[error("Invalid number for '{property}': {value:?}")]
    InvalidNumber {
        /// The property that was edited.
        property: String,
        /// The raw value received.
        value: String,
    },

    /// No shape with the given id exists
    #[error("Shape {0} not found")]
    ShapeNotFound(u64),
}

/// Main error type for ShapeKit
#[derive(Error, Debug)]
pub enum Error {
    /// Designer error
    #[error(transparent)]
    Designer(#[from] DesignerError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
