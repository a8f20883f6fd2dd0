//! Feature Engineering Engine
//!
//! Derives per-reading magnitude and trailing-window statistics over the
//! time-sorted dataset, producing an enriched feature table.

mod engine;
mod error;
mod order;
mod window;

pub use engine::{compute_features, FeatureConfig, FeatureRow};
pub use error::FeatureError;
pub use order::{time_sorted_indices, TIMESTAMP_FORMAT};
pub use window::WindowStats;
