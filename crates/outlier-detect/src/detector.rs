//! Outlier Mask Computation

use crate::error::DetectError;
use crate::method::{OutlierConfig, OutlierMethod};
use sensor_log::{Axis, Dataset};
use std::cmp::Ordering;
use tracing::debug;

/// IQR fence multiplier (Tukey's rule)
const IQR_FENCE: f64 = 1.5;

/// Score every reading against the configured method.
///
/// Returns one boolean per reading, aligned with the dataset's original
/// order (independent of any time sort). A reading is flagged when any of
/// the three axes flags it. Configuration is validated before any
/// computation.
pub fn detect(dataset: &Dataset, config: &OutlierConfig) -> Result<Vec<bool>, DetectError> {
    if !config.threshold.is_finite() || config.threshold <= 0.0 {
        return Err(DetectError::InvalidThreshold(config.threshold));
    }

    let mut mask = vec![false; dataset.len()];
    for axis in Axis::ALL {
        let values = dataset.axis_values(axis);
        match config.method {
            OutlierMethod::ZScore => flag_zscore(&values, config.threshold, &mut mask),
            OutlierMethod::Iqr => flag_iqr(&values, &mut mask),
        }
    }

    let flagged = mask.iter().filter(|&&f| f).count();
    debug!(
        "{} method flagged {} of {} readings",
        config.method.name(),
        flagged,
        mask.len()
    );
    Ok(mask)
}

/// Flag values whose sample z-score magnitude exceeds the threshold.
///
/// A zero or undefined spread means no flags are possible on this axis;
/// NaN/Inf scores are never propagated into the mask.
fn flag_zscore(values: &[f64], threshold: f64, mask: &mut [bool]) {
    let n = values.len();
    if n < 2 {
        return;
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let sum_sq: f64 = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum();
    let std_dev = (sum_sq / (n - 1) as f64).sqrt();
    if !(std_dev > 0.0) {
        return;
    }

    for (flag, value) in mask.iter_mut().zip(values) {
        if ((value - mean) / std_dev).abs() > threshold {
            *flag = true;
        }
    }
}

/// Flag values outside the Tukey fences `[Q1 - 1.5 IQR, Q3 + 1.5 IQR]`
fn flag_iqr(values: &[f64], mask: &mut [bool]) {
    if values.is_empty() {
        return;
    }

    let q1 = percentile(values, 0.25);
    let q3 = percentile(values, 0.75);
    let iqr = q3 - q1;
    let lower = q1 - IQR_FENCE * iqr;
    let upper = q3 + IQR_FENCE * iqr;

    for (flag, value) in mask.iter_mut().zip(values) {
        if *value < lower || *value > upper {
            *flag = true;
        }
    }
}

/// Linearly interpolated percentile, `q` in [0, 1]
fn percentile(values: &[f64], q: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let rank = q * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let frac = rank - lower as f64;
        sorted[lower] + frac * (sorted[upper] - sorted[lower])
    }
}
