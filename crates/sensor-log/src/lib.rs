//! Sensor Log Ingestion
//!
//! Parses line-oriented 3-axis sensor logs and loads them into labeled,
//! ordered datasets for downstream analysis.

mod error;
mod loader;
mod parser;
mod reading;

pub use error::LoadError;
pub use loader::{load_all, load_file, LogSource};
pub use parser::parse_line;
pub use reading::{Axis, Dataset, ParsedLine, Reading};
