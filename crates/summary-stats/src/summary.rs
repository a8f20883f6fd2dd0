//! Per-Label Descriptive Statistics

use sensor_log::{Axis, Dataset, Reading};
use serde::Serialize;
use tracing::debug;

/// Descriptive statistics for one axis of one label group.
///
/// Standard deviation is the unbiased sample deviation and is NaN for a
/// single-reading group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl AxisSummary {
    fn compute(values: &[f64]) -> Self {
        let n = values.len();
        let nf = n as f64;
        let mean = values.iter().sum::<f64>() / nf;
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let std_dev = if n < 2 {
            f64::NAN
        } else {
            let sum_sq: f64 = values
                .iter()
                .map(|v| {
                    let d = v - mean;
                    d * d
                })
                .sum();
            (sum_sq / (nf - 1.0)).sqrt()
        };

        Self {
            mean,
            std_dev,
            min,
            max,
            range: max - min,
        }
    }
}

/// Descriptive statistics for one label group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelSummary {
    pub label: String,
    pub count: usize,
    pub x: AxisSummary,
    pub y: AxisSummary,
    pub z: AxisSummary,
    pub magnitude: AxisSummary,
}

impl LabelSummary {
    /// Summary for the named axis
    pub fn axis(&self, axis: Axis) -> &AxisSummary {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

/// Group the dataset by label and compute per-axis descriptive statistics,
/// including derived magnitude statistics.
///
/// Groups appear in order of first appearance in the (unsorted) dataset.
/// Purely descriptive, no side effects beyond the returned structure.
pub fn summarize(dataset: &Dataset) -> Vec<LabelSummary> {
    let summaries: Vec<LabelSummary> = dataset
        .labels()
        .iter()
        .map(|&label| {
            let group: Vec<&Reading> = dataset.iter().filter(|r| r.label == label).collect();
            let xs: Vec<f64> = group.iter().map(|r| r.x as f64).collect();
            let ys: Vec<f64> = group.iter().map(|r| r.y as f64).collect();
            let zs: Vec<f64> = group.iter().map(|r| r.z as f64).collect();
            let mags: Vec<f64> = group.iter().map(|r| r.magnitude()).collect();

            LabelSummary {
                label: label.to_string(),
                count: group.len(),
                x: AxisSummary::compute(&xs),
                y: AxisSummary::compute(&ys),
                z: AxisSummary::compute(&zs),
                magnitude: AxisSummary::compute(&mags),
            }
        })
        .collect();

    debug!("summarized {} label groups", summaries.len());
    summaries
}
