//! Flat CSV Export Sink
//!
//! Writes the raw reading table or the enriched feature table as flat CSV.
//! NaN feature values (undefined standard deviations) are written as `NaN`,
//! never coerced to zero.

use anyhow::Result;
use feature_engine::{FeatureRow, WindowStats};
use sensor_log::Dataset;
use std::path::Path;
use tracing::info;

const READING_COLUMNS: [&str; 5] = ["timestamp", "x", "y", "z", "label"];
const TRACKED_AXES: [&str; 4] = ["x", "y", "z", "magnitude"];
const WINDOW_SUFFIXES: [&str; 5] = ["mean", "std", "max", "min", "range"];

/// Write the raw reading table
pub fn write_raw_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(READING_COLUMNS)?;
    for reading in dataset.iter() {
        writer.write_record(&[
            reading.timestamp.clone(),
            reading.x.to_string(),
            reading.y.to_string(),
            reading.z.to_string(),
            reading.label.clone(),
        ])?;
    }
    writer.flush()?;

    info!("raw table written to {} ({} rows)", path.display(), dataset.len());
    Ok(())
}

/// Write the enriched feature table: the raw columns plus magnitude and the
/// five window statistics for each tracked axis
pub fn write_feature_csv(rows: &[FeatureRow], path: &Path) -> Result<()> {
    let mut header: Vec<String> = READING_COLUMNS.iter().map(|c| c.to_string()).collect();
    header.push("magnitude".to_string());
    for axis in TRACKED_AXES {
        for suffix in WINDOW_SUFFIXES {
            header.push(format!("{}_{}", axis, suffix));
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&header)?;
    for row in rows {
        let mut record = vec![
            row.reading.timestamp.clone(),
            row.reading.x.to_string(),
            row.reading.y.to_string(),
            row.reading.z.to_string(),
            row.reading.label.clone(),
            row.magnitude.to_string(),
        ];
        for stats in [&row.x, &row.y, &row.z, &row.magnitude_stats] {
            push_window_columns(&mut record, stats);
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;

    info!(
        "feature table written to {} ({} rows)",
        path.display(),
        rows.len()
    );
    Ok(())
}

fn push_window_columns(record: &mut Vec<String>, stats: &WindowStats) {
    record.push(stats.mean.to_string());
    record.push(stats.std_dev.to_string());
    record.push(stats.max.to_string());
    record.push(stats.min.to_string());
    record.push(stats.range.to_string());
}
