//! Pipeline Configuration

use feature_engine::FeatureConfig;
use outlier_detect::OutlierConfig;
use sensor_log::LogSource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Optional CSV export targets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Raw reading table destination
    pub raw_csv: Option<PathBuf>,
    /// Enriched feature table destination
    pub feature_csv: Option<PathBuf>,
}

/// Full pipeline configuration, loadable from a TOML/JSON/YAML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Log files to ingest, each with its operating-condition label
    #[serde(default)]
    pub sources: Vec<LogSource>,
    /// Rolling-window feature settings
    #[serde(default)]
    pub features: FeatureConfig,
    /// Outlier detection settings
    #[serde(default)]
    pub outliers: OutlierConfig,
    /// Export destinations
    #[serde(default)]
    pub export: ExportConfig,
}

impl PipelineConfig {
    /// Load from a config file (extension resolved by the `config` crate).
    ///
    /// An unrecognized outlier method in the file is rejected here, before
    /// any computation starts.
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?
            .try_deserialize()
    }
}
