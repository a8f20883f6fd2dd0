//! Feature Engine Error Types

use thiserror::Error;

/// Errors during feature computation
#[derive(Debug, Clone, Error)]
pub enum FeatureError {
    /// Window size fails validation before any computation runs
    #[error("window size must be at least 1, got {0}")]
    InvalidWindowSize(usize),
}
