//! Summary Statistics
//!
//! Descriptive per-label statistics over the full dataset, for reporting.

mod summary;

pub use summary::{summarize, AxisSummary, LabelSummary};
