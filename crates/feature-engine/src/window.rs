//! Trailing-Window Statistics

use serde::Serialize;

/// Descriptive statistics over one window of values.
///
/// The standard deviation is the unbiased sample deviation (ddof = 1) and is
/// `NaN` for a window of fewer than two values. The sentinel is preserved
/// through downstream computation, never coerced to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation, NaN below two samples
    pub std_dev: f64,
    /// Minimum value in the window
    pub min: f64,
    /// Maximum value in the window
    pub max: f64,
    /// `max - min`
    pub range: f64,
}

impl WindowStats {
    /// Compute statistics over a window of values
    pub fn compute(values: &[f64]) -> Self {
        let n = values.len();
        if n == 0 {
            return Self {
                mean: f64::NAN,
                std_dev: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
                range: f64::NAN,
            };
        }

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
