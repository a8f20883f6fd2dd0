//! Outlier Method Selection

use crate::error::DetectError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default z-score threshold in standard deviations
pub const DEFAULT_THRESHOLD: f64 = 3.0;

/// Statistical outlier rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlierMethod {
    /// Standard-deviation distance from the full-dataset mean
    #[default]
    ZScore,
    /// Distance from the interquartile range (1.5 IQR fences)
    Iqr,
}

impl OutlierMethod {
    /// Lowercase method name, as accepted in configuration
    pub fn name(self) -> &'static str {
        match self {
            OutlierMethod::ZScore => "zscore",
            OutlierMethod::Iqr => "iqr",
        }
    }
}

impl FromStr for OutlierMethod {
    type Err = DetectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zscore" => Ok(OutlierMethod::ZScore),
            "iqr" => Ok(OutlierMethod::Iqr),
            other => Err(DetectError::UnknownMethod(other.to_string())),
        }
    }
}

/// Outlier detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlierConfig {
    /// Detection rule
    #[serde(default)]
    pub method: OutlierMethod,
    /// Z-score cutoff in standard deviations; ignored by the IQR method
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            method: OutlierMethod::ZScore,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}
