//! Error type shared by every operator.
//!
//! Operators fail fast: an error is returned before any caller-visible
//! data is touched, so a failed call never leaves a half-mutated genome
//! or population behind.

use thiserror::Error;

/// Errors raised by selection, crossover, and mutation operators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperatorError {
    /// An argument is malformed: unknown mode or strategy token, operands of
    /// different shapes, or a structural parameter out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// More unique random indices were requested than the pool holds.
    #[error("cannot draw {requested} unique indices from a pool of {available}")]
    DegenerateSamplingRequest {
        /// Number of unique indices requested.
        requested: usize,
        /// Number of indices available to draw from.
        available: usize,
    },
}

impl OperatorError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        OperatorError::InvalidArgument(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OperatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_argument() {
        let err = OperatorError::invalid("unknown mode 'avg'");
        assert_eq!(err.to_string(), "invalid argument: unknown mode 'avg'");
    }

    #[test]
    fn test_display_degenerate_sampling() {
        let err = OperatorError::DegenerateSamplingRequest {
            requested: 5,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "cannot draw 5 unique indices from a pool of 3"
        );
    }
}
