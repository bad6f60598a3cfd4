//! Error types for transform operations.

use thiserror::Error;

/// Errors that can occur while discretizing, transforming or truncating a signal.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FftError {
    /// Sequence length cannot be resolved to a power of two.
    ///
    /// Raised for empty input, for an inverse transform whose spectrum is not a
    /// power of two long, and for any recursion level that is neither 1 nor even.
    #[error("transform length must be a non-zero power of 2, got {0}")]
    InvalidLength(usize),

    /// Discretization interval or step is not strictly positive and finite,
    /// or yields more than [`MAX_SAMPLES`](crate::discretize::MAX_SAMPLES) points.
    #[error("invalid sampling interval: to = {to}, step = {step} (both must be finite and > 0, at most 2^26 points)")]
    InvalidInterval { to: f64, step: f64 },

    /// Truncation fraction outside `[0, 1)`.
    #[error("truncation fraction must lie in [0, 1), got {0}")]
    InvalidFraction(f64),
}

/// Result type for transform operations.
pub type FftResult<T> = Result<T, FftError>;
