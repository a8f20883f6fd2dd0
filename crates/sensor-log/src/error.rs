//! Loader Error Types

use thiserror::Error;

/// Errors surfaced by dataset loading
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// No readings could be loaded from any configured file. Per-file
    /// failures alone never produce this; only an empty aggregate does.
    #[error("no readings could be loaded from any configured file")]
    EmptyDataset,
}
