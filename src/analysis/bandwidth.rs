//! Per-record bandwidth derived from consecutive timestamps

use crate::core::constants::units;
use crate::core::types::{Series, SeriesKind};

/// Derived columns of one series.
///
/// Both columns are `None` at index 0, where there is no previous record.
/// A zero or negative gap is not guarded: the division yields `inf`, `-inf`
/// or `NaN` and that value is kept. See [`Bandwidth::anomalies`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bandwidth {
    kind: SeriesKind,
    time_diff: Vec<Option<f64>>,
    mbps: Vec<Option<f64>>,
}

/// Compute `time_diff` and `bandwidth_mbps` for every record of `series`.
pub fn compute_bandwidth(series: &Series) -> Bandwidth {
    let records = series.records();
    let mut time_diff = Vec::with_capacity(records.len());
    let mut mbps = Vec::with_capacity(records.len());

    for (i, record) in records.iter().enumerate() {
        if i == 0 {
            time_diff.push(None);
            mbps.push(None);
            continue;
        }
        let diff = record.stamp - records[i - 1].stamp;
        let bits = record.size as f64 * units::BITS_PER_BYTE;
        time_diff.push(Some(diff));
        mbps.push(Some(bits / (diff * units::BITS_PER_MEGABIT)));
    }

    Bandwidth {
        kind: series.kind(),
        time_diff,
        mbps,
    }
}

impl Bandwidth {
    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    pub fn time_diff(&self) -> &[Option<f64>] {
        &self.time_diff
    }

    pub fn mbps(&self) -> &[Option<f64>] {
        &self.mbps
    }

    pub fn len(&self) -> usize {
        self.mbps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mbps.is_empty()
    }

    /// Indices whose gap to the previous record is zero or negative.
    ///
    /// These come from duplicate or out-of-order timestamps. Their bandwidth
    /// is infinite or undefined and flows into resampling and statistics
    /// unchanged; callers only report them.
    pub fn anomalies(&self) -> Vec<usize> {
        self.time_diff
            .iter()
            .enumerate()
            .filter_map(|(i, diff)| match diff {
                Some(d) if *d <= 0.0 || d.is_nan() => Some(i),
                _ => None,
            })
            .collect()
    }

    /// Bandwidth with the fill rule applied: missing values and `NaN`
    /// become `0.0`, infinities are kept.
    pub fn filled(&self) -> Vec<f64> {
        self.mbps.iter().map(|v| fill_missing(*v)).collect()
    }
}

/// Fill rule used before interpolation
pub fn fill_missing(value: Option<f64>) -> f64 {
    match value {
        Some(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}
