//! Motor Vibration Analysis Pipeline
//!
//! Orchestrates the full batch: load labeled logs, report per-label
//! statistics, detect outliers, derive the feature table, and export CSV.

use anyhow::Context;
use sensor_log::Axis;
use summary_stats::LabelSummary;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod export;

pub use config::{ExportConfig, PipelineConfig};
pub use export::{write_feature_csv, write_raw_csv};

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("logging already initialized");
}

/// Run the full pipeline for one configuration.
///
/// Fails fast when no readings could be loaded from any configured source,
/// before any feature or outlier computation runs.
pub fn run(config: &PipelineConfig) -> anyhow::Result<()> {
    let dataset = sensor_log::load_all(&config.sources)
        .context("no data loaded, check source paths and file contents")?;

    for summary in summary_stats::summarize(&dataset) {
        report_summary(&summary);
    }

    let mask = outlier_detect::detect(&dataset, &config.outliers)?;
    let flagged = mask.iter().filter(|&&f| f).count();
    info!(
        "outliers ({}): {} of {} readings ({:.1}%)",
        config.outliers.method.name(),
        flagged,
        dataset.len(),
        100.0 * flagged as f64 / dataset.len() as f64
    );

    let rows = feature_engine::compute_features(&dataset, &config.features)?;

    if let Some(path) = &config.export.raw_csv {
        export::write_raw_csv(&dataset, path)?;
    }
    if let Some(path) = &config.export.feature_csv {
        export::write_feature_csv(&rows, path)?;
    }

    Ok(())
}

fn report_summary(summary: &LabelSummary) {
    info!("--- {} ({} readings) ---", summary.label, summary.count);
    for axis in Axis::ALL {
        let stats = summary.axis(axis);
        info!(
            "  {}: mean {:.2}, std {:.2}, min {}, max {}, range {}",
            axis.name(),
            stats.mean,
            stats.std_dev,
            stats.min,
            stats.max,
            stats.range
        );
    }
    info!(
        "  magnitude: mean {:.2}, std {:.2}, min {:.2}, max {:.2}",
        summary.magnitude.mean,
        summary.magnitude.std_dev,
        summary.magnitude.min,
        summary.magnitude.max
    );
}
