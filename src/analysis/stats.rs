//! Descriptive statistics

use serde::Serialize;

/// Mean and sample standard deviation of a set of values.
///
/// `NaN` samples are skipped, infinite ones are kept and poison both
/// numbers. `stdev` uses the `n - 1` denominator and is `NaN` below two
/// samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub stdev: f64,
    pub count: usize,
}

impl Stats {
    pub fn from_values(values: &[f64]) -> Self {
        let samples: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        let count = samples.len();
        if count == 0 {
            return Self {
                mean: f64::NAN,
                stdev: f64::NAN,
                count,
            };
        }

        let mean = samples.iter().sum::<f64>() / count as f64;
        let stdev = if count < 2 {
            f64::NAN
        } else {
            let squared: f64 = samples.iter().map(|v| (v - mean).powi(2)).sum();
            (squared / (count - 1) as f64).sqrt()
        };

        Self { mean, stdev, count }
    }
}
