//! Detection Error Types

use thiserror::Error;

/// Configuration errors surfaced before any detection runs
#[derive(Debug, Clone, Error)]
pub enum DetectError {
    /// Method string is neither `zscore` nor `iqr`. Never falls through to
    /// a default method.
    #[error("unknown outlier method '{0}', expected 'zscore' or 'iqr'")]
    UnknownMethod(String),

    /// Threshold is not a positive finite number
    #[error("outlier threshold must be positive and finite, got {0}")]
    InvalidThreshold(f64),
}
