//! Network-related error types.

use thiserror::Error;

/// Errors reported by `Network::run` and `Network::train_step`.
///
/// Construction itself never returns an error: a network built with fewer
/// than two layer sizes is produced in a permanently invalid state, and every
/// later operation on it fails with [`NetworkError::InvalidNetwork`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("input length {got} does not match input layer width {expected}")]
    InputShapeMismatch { expected: usize, got: usize },

    #[error("target length {got} does not match output layer width {expected}")]
    TargetShapeMismatch { expected: usize, got: usize },

    #[error("operation on a network that failed construction")]
    InvalidNetwork,
}
