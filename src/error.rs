//! Error types for the safe ReLU entry points.
//!
//! The raw kernels have no recoverable errors: their preconditions are caller
//! contracts checked only by `debug_assert!`. The slice API validates its
//! arguments up front and reports violations through [`ReluError`].

use std::fmt;

/// Errors reported by the safe slice API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReluError {
    /// The input (and output) slice holds no elements.
    EmptyBuffer,
    /// Input and output slices have different element counts.
    LengthMismatch {
        /// Number of elements in the input slice.
        input: usize,
        /// Number of elements in the output slice.
        output: usize,
    },
}

impl fmt::Display for ReluError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReluError::EmptyBuffer => write!(f, "Validation error: buffer must not be empty"),
            ReluError::LengthMismatch { input, output } => write!(
                f,
                "Validation error: length mismatch (input has {} elements, output has {})",
                input, output
            ),
        }
    }
}

impl std::error::Error for ReluError {}

/// Result type alias for ReLU operations.
pub type Result<T> = std::result::Result<T, ReluError>;

/// Creates an empty-buffer error.
pub fn empty_buffer_error() -> ReluError {
    ReluError::EmptyBuffer
}

/// Creates a length-mismatch error.
pub fn length_mismatch_error(input: usize, output: usize) -> ReluError {
    ReluError::LengthMismatch { input, output }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_display() {
        let display = format!("{}", empty_buffer_error());
        assert!(display.contains("Validation error"));
        assert!(display.contains("must not be empty"));
    }

    #[test]
    fn test_length_mismatch_display() {
        let display = format!("{}", length_mismatch_error(7, 5));
        assert!(display.contains("length mismatch"));
        assert!(display.contains("input has 7 elements"));
        assert!(display.contains("output has 5"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(length_mismatch_error(3, 4), length_mismatch_error(3, 4));
        assert_ne!(length_mismatch_error(3, 4), length_mismatch_error(4, 3));
        assert_ne!(empty_buffer_error(), length_mismatch_error(0, 0));
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = empty_buffer_error();

        let _: &dyn std::error::Error = &error;
        assert!(std::error::Error::source(&error).is_none());
    }
}
