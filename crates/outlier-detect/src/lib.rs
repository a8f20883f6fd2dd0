//! Outlier Detection
//!
//! Scores every reading against a configurable statistical method (z-score
//! or IQR) and returns a boolean mask aligned with the input order.

mod detector;
mod error;
mod method;

pub use detector::detect;
pub use error::DetectError;
pub use method::{OutlierConfig, OutlierMethod, DEFAULT_THRESHOLD};
