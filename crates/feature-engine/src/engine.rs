//! Rolling-Window Feature Computation

use crate::error::FeatureError;
use crate::order::time_sorted_indices;
use crate::window::WindowStats;
use sensor_log::{Dataset, Reading};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default trailing window length in readings
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Feature engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Trailing window length in readings (shorter at the start of the
    /// series)
    #[serde(default = "default_window_size")]
    pub window_size: usize,
}

fn default_window_size() -> usize {
    DEFAULT_WINDOW_SIZE
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

/// One reading enriched with magnitude and trailing-window statistics for
/// each tracked axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    pub reading: Reading,
    /// Euclidean norm of the three axis values
    pub magnitude: f64,
    pub x: WindowStats,
    pub y: WindowStats,
    pub z: WindowStats,
    pub magnitude_stats: WindowStats,
}

/// Compute the enriched feature table.
///
/// The dataset is sorted by its time key (stable, with positional fallback
/// when timestamps do not parse), then each tracked axis gets statistics
/// over the trailing window of the most recent `min(window_size, i + 1)`
/// values ending at position `i`. Strictly causal: a row's statistics
/// depend only on readings at or before its own post-sort position.
///
/// Pure over the input; the returned rows are in post-sort order.
pub fn compute_features(
    dataset: &Dataset,
    config: &FeatureConfig,
) -> Result<Vec<FeatureRow>, FeatureError> {
    if config.window_size == 0 {
        return Err(FeatureError::InvalidWindowSize(0));
    }

    let order = time_sorted_indices(dataset);
    let readings = dataset.readings();

    let xs: Vec<f64> = order.iter().map(|&i| readings[i].x as f64).collect();
    let ys: Vec<f64> = order.iter().map(|&i| readings[i].y as f64).collect();
    let zs: Vec<f64> = order.iter().map(|&i| readings[i].z as f64).collect();
    let mags: Vec<f64> = order.iter().map(|&i| readings[i].magnitude()).collect();

    let window = config.window_size;
    let mut rows = Vec::with_capacity(order.len());
    for (pos, &idx) in order.iter().enumerate() {
        let start = (pos + 1).saturating_sub(window);
        rows.push(FeatureRow {
            reading: readings[idx].clone(),
            magnitude: mags[pos],
            x: WindowStats::compute(&xs[start..=pos]),
            y: WindowStats::compute(&ys[start..=pos]),
            z: WindowStats::compute(&zs[start..=pos]),
            magnitude_stats: WindowStats::compute(&mags[start..=pos]),
        });
    }

    debug!("computed {} feature rows (window = {})", rows.len(), window);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sensor_log::Dataset;

    fn reading(timestamp: &str, x: i32, y: i32, z: i32) -> Reading {
        Reading {
            timestamp: timestamp.to_string(),
            x,
            y,
            z,
            label: "on".to_string(),
        }
    }

    fn sequential_dataset(values: &[(i32, i32, i32)]) -> Dataset {
        Dataset::new(
            values
                .iter()
                .enumerate()
                .map(|(i, &(x, y, z))| {
                    reading(&format!("10:00:{:02}:{:03}", i / 1000, i % 1000), x, y, z)
                })
                .collect(),
        )
    }

    fn stats_eq(a: &WindowStats, b: &WindowStats) -> bool {
        let field_eq =
            |p: f64, q: f64| (p.is_nan() && q.is_nan()) || (p - q).abs() < 1e-12;
        field_eq(a.mean, b.mean)
            && field_eq(a.std_dev, b.std_dev)
            && field_eq(a.min, b.min)
            && field_eq(a.max, b.max)
            && field_eq(a.range, b.range)
    }

    fn rows_eq(a: &FeatureRow, b: &FeatureRow) -> bool {
        a.reading == b.reading
            && (a.magnitude - b.magnitude).abs() < 1e-12
            && stats_eq(&a.x, &b.x)
            && stats_eq(&a.y, &b.y)
            && stats_eq(&a.z, &b.z)
            && stats_eq(&a.magnitude_stats, &b.magnitude_stats)
    }

    #[test]
    fn test_zero_window_size_rejected() {
        let dataset = sequential_dataset(&[(1, 1, 1)]);
        let config = FeatureConfig { window_size: 0 };
        assert!(matches!(
            compute_features(&dataset, &config),
            Err(FeatureError::InvalidWindowSize(0))
        ));
    }

    #[test]
    fn test_single_reading_window() {
        let dataset = sequential_dataset(&[(3, 4, 0)]);
        let rows = compute_features(&dataset, &FeatureConfig::default()).unwrap();
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert!((row.magnitude - 5.0).abs() < 1e-12);
        assert!(row.x.std_dev.is_nan());
        assert!(row.magnitude_stats.std_dev.is_nan());
        assert_eq!(row.x.mean, 3.0);
        assert_eq!(row.x.min, 3.0);
        assert_eq!(row.x.max, 3.0);
        assert_eq!(row.x.range, 0.0);
    }

    #[test]
    fn test_window_grows_then_saturates() {
        let values: Vec<(i32, i32, i32)> = (0..15).map(|i| (i, 0, 0)).collect();
        let dataset = sequential_dataset(&values);
        let config = FeatureConfig { window_size: 10 };
        let rows = compute_features(&dataset, &config).unwrap();

        // position 4: window [0..=4], mean 2
        assert!((rows[4].x.mean - 2.0).abs() < 1e-12);
        // position 14: window [5..=14], mean 9.5
        assert!((rows[14].x.mean - 9.5).abs() < 1e-12);
        assert_eq!(rows[14].x.min, 5.0);
        assert_eq!(rows[14].x.max, 14.0);
        assert_eq!(rows[14].x.range, 9.0);
    }

    #[test]
    fn test_rows_follow_time_order_not_insertion_order() {
        let dataset = Dataset::new(vec![
            reading("10:00:02:000", 2, 0, 0),
            reading("10:00:00:000", 0, 0, 0),
            reading("10:00:01:000", 1, 0, 0),
        ]);
        let rows = compute_features(&dataset, &FeatureConfig::default()).unwrap();
        let xs: Vec<i32> = rows.iter().map(|r| r.reading.x).collect();
        assert_eq!(xs, vec![0, 1, 2]);

        // trailing means over the sorted series
        assert!((rows[2].x.mean - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unparseable_timestamps_keep_insertion_order() {
        let dataset = Dataset::new(vec![
            reading("later", 9, 0, 0),
            reading("earlier", 1, 0, 0),
        ]);
        let rows = compute_features(&dataset, &FeatureConfig::default()).unwrap();
        assert_eq!(rows[0].reading.x, 9);
        assert_eq!(rows[1].reading.x, 1);
    }

    #[test]
    fn test_input_dataset_not_mutated() {
        let dataset = Dataset::new(vec![
            reading("10:00:01:000", 1, 2, 3),
            reading("10:00:00:000", 4, 5, 6),
        ]);
        let before = dataset.clone();
        compute_features(&dataset, &FeatureConfig::default()).unwrap();
        assert_eq!(dataset, before);
    }

    proptest! {
        // Strict causality: rewriting the tail of the series never changes
        // the feature rows of the prefix.
        #[test]
        fn test_prefix_rows_invariant_under_tail_edits(
            tail in proptest::collection::vec(
                (-500i32..500, -500i32..500, -500i32..500),
                1..20,
            )
        ) {
            let prefix: Vec<(i32, i32, i32)> =
                (0..12).map(|i| (i * 3 - 5, i, -i)).collect();
            let prefix_dataset = sequential_dataset(&prefix);

            // tail timestamps sort strictly after the prefix
            let mut readings: Vec<Reading> = prefix_dataset.readings().to_vec();
            for (i, &(x, y, z)) in tail.iter().enumerate() {
                readings.push(reading(&format!("11:00:00:{:03}", i), x, y, z));
            }
            let combined_dataset = Dataset::new(readings);

            let config = FeatureConfig::default();
            let prefix_rows = compute_features(&prefix_dataset, &config).unwrap();
            let combined_rows = compute_features(&combined_dataset, &config).unwrap();

            for (a, b) in prefix_rows.iter().zip(combined_rows.iter()) {
                prop_assert!(rows_eq(a, b));
            }
        }
    }
}
