//! Error types for numalg

use thiserror::Error;

/// Result type alias using numalg's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in numalg operations
///
/// Usage errors (shapes, indices, component counts) and indeterminate
/// mathematics (`0^0`, the argument of zero, division by an exact zero) are
/// reported here. IEEE states such as NaN and infinity are never errors: they
/// propagate through the float-backed members as values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Invalid axis index
    #[error("Invalid dimension {dim} for tensor with {ndim} dimensions")]
    InvalidDimension {
        /// The invalid axis
        dim: usize,
        /// Number of axes
        ndim: usize,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },

    /// Wrong number of raw components for a member type
    #[error("Expected {expected} components, got {got}")]
    ComponentCount {
        /// Components required by the member type
        expected: usize,
        /// Components supplied
        got: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Mathematically indeterminate input, e.g. `0^0` or `ln(0)`
    #[error("Indeterminate form in '{op}': {reason}")]
    Indeterminate {
        /// The operation name
        op: &'static str,
        /// Which form was hit
        reason: &'static str,
    },

    /// Division by a value of zero magnitude
    #[error("Division by zero in '{op}'")]
    DivisionByZero {
        /// The operation name
        op: &'static str,
    },

    /// Matrix has no inverse
    #[error("Matrix is singular in '{op}'")]
    Singular {
        /// The operation name
        op: &'static str,
    },

    /// Malformed textual representation
    #[error("Cannot parse '{input}': {reason}")]
    Parse {
        /// The offending input (or fragment of it)
        input: String,
        /// Reason for the failure
        reason: String,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an indeterminate-form error
    pub fn indeterminate(op: &'static str, reason: &'static str) -> Self {
        Self::Indeterminate { op, reason }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a parse error
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
