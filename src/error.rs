//! Error type shared by every entry point of the crate.
//!
//! All variants are input-validation failures raised at construction or
//! reordering time. Solving itself never fails.

use thiserror::Error;

/// Errors produced while building or querying a route.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// No points were supplied.
    #[error("route input must contain at least one point")]
    EmptyInput,

    /// A coordinate was NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Input position of the offending point.
        index: usize,
    },

    /// A slice handed to the reordering helpers has the wrong length.
    #[error("expected {expected} items to reorder, got {actual}")]
    LengthMismatch {
        /// Number of points in the route.
        expected: usize,
        /// Length of the slice that was supplied.
        actual: usize,
    },

    /// An object has no point-valued property under the requested key.
    #[error("object {index} has no point property named `{key}`")]
    MissingProperty {
        /// Input position of the offending object.
        index: usize,
        /// The property key that was looked up.
        key: String,
    },

    /// A point accessor returned nothing for an object.
    #[error("point accessor returned no point for object {index}")]
    MissingPoint {
        /// Input position of the offending object.
        index: usize,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RouteError>;

impl RouteError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
