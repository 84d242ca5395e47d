//! Error types for lanesum operations.
//!
//! The panicking entry points (`SimdAdd`, `add_into`) assert their length
//! contracts. The `try_*` variants report the same conditions through
//! [`LanesumError`] instead.

use std::fmt;

/// Errors that can occur while adding vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanesumError {
    /// The two operands have different lengths.
    LengthMismatch {
        /// Length of the left operand.
        lhs: usize,
        /// Length of the right operand.
        rhs: usize,
    },
    /// The output buffer does not match the operand length.
    OutputLength {
        /// Length of the operands.
        expected: usize,
        /// Length of the output buffer.
        actual: usize,
    },
    /// A slice could not be turned into a fixed-length vector.
    InvalidLength {
        /// Required number of elements.
        expected: usize,
        /// Number of elements provided.
        actual: usize,
    },
}

impl fmt::Display for LanesumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanesumError::LengthMismatch { lhs, rhs } => write!(
                f,
                "Vectors must be the same length (left has {} elements, right has {})",
                lhs, rhs
            ),
            LanesumError::OutputLength { expected, actual } => write!(
                f,
                "Output buffer has wrong length (expected {} elements, got {})",
                expected, actual
            ),
            LanesumError::InvalidLength { expected, actual } => write!(
                f,
                "Invalid vector length (expected {} elements, got {})",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for LanesumError {}

/// Result type alias for lanesum operations.
pub type Result<T> = std::result::Result<T, LanesumError>;

/// Creates a length mismatch error.
pub fn length_mismatch(lhs: usize, rhs: usize) -> LanesumError {
    LanesumError::LengthMismatch { lhs, rhs }
}

/// Creates an output length error.
pub fn output_length(expected: usize, actual: usize) -> LanesumError {
    LanesumError::OutputLength { expected, actual }
}

/// Creates an invalid length error.
pub fn invalid_length(expected: usize, actual: usize) -> LanesumError {
    LanesumError::InvalidLength { expected, actual }
}
