//! Resampling of both bandwidth series onto a shared time grid

use log::debug;
use serde::Serialize;

use crate::analysis::bandwidth::Bandwidth;
use crate::core::error::{BwlatError, Result};
use crate::core::types::Series;

/// Both bandwidth series and their sum on the unified grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resampled {
    pub grid: Vec<f64>,
    pub odometry: Vec<f64>,
    pub images: Vec<f64>,
    pub total: Vec<f64>,
}

impl Resampled {
    /// Largest grid stamp, `None` for an empty grid
    pub fn max_stamp(&self) -> Option<f64> {
        self.grid.last().copied()
    }
}

/// Sorted union of two stamp sets with exact duplicates removed.
pub fn unified_grid(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut grid: Vec<f64> = a.iter().chain(b).copied().collect();
    grid.sort_by(f64::total_cmp);
    grid.dedup();
    grid
}

/// Piecewise-linear interpolation of `(xp, fp)` at each point of `grid`.
///
/// `xp` must be ascending. Points left of `xp[0]` take `fp[0]` and points
/// right of the last sample take the last value; nothing is extrapolated.
/// An empty `xp` produces `NaN` everywhere.
pub fn interpolate(grid: &[f64], xp: &[f64], fp: &[f64]) -> Vec<f64> {
    let n = xp.len().min(fp.len());
    if n == 0 {
        return vec![f64::NAN; grid.len()];
    }
    let (xp, fp) = (&xp[..n], &fp[..n]);
    grid.iter().map(|&x| interpolate_at(x, xp, fp)).collect()
}

fn interpolate_at(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let last = xp.len() - 1;
    if x.is_nan() {
        return f64::NAN;
    }
    if last == 0 || x < xp[0] {
        return fp[0];
    }
    if x >= xp[last] {
        return fp[last];
    }

    // Repeated stamps resolve to the last sample at that stamp
    let upper = xp.partition_point(|&v| v <= x).clamp(1, last);
    let lower = upper - 1;
    if xp[lower] == x {
        return fp[lower];
    }

    let (x0, x1, y0, y1) = (xp[lower], xp[upper], fp[lower], fp[upper]);
    let slope = (y1 - y0) / (x1 - x0);
    let mut value = slope * (x - x0) + y0;
    // Infinite samples make one side of the segment NaN; try the other side
    if value.is_nan() {
        value = slope * (x - x1) + y1;
        if value.is_nan() && y0 == y1 {
            value = y0;
        }
    }
    value
}

/// Project both series' filled bandwidth onto the union of their stamps.
pub fn resample(
    odometry: &Series,
    odometry_bw: &Bandwidth,
    images: &Series,
    images_bw: &Bandwidth,
) -> Result<Resampled> {
    for series in [odometry, images] {
        if series.is_empty() {
            return Err(BwlatError::InsufficientData {
                series: series.kind(),
                needed: 1,
                found: 0,
            });
        }
    }

    let odometry_stamps = odometry.stamps();
    let images_stamps = images.stamps();
    let grid = unified_grid(&odometry_stamps, &images_stamps);
    debug!(
        "Resampling onto {} grid point(s) ({} odometry, {} images)",
        grid.len(),
        odometry_stamps.len(),
        images_stamps.len()
    );

    let odometry_values = interpolate(&grid, &odometry_stamps, &odometry_bw.filled());
    let images_values = interpolate(&grid, &images_stamps, &images_bw.filled());
    let total = odometry_values
        .iter()
        .zip(&images_values)
        .map(|(o, i)| o + i)
        .collect();

    Ok(Resampled {
        grid,
        odometry: odometry_values,
        images: images_values,
        total,
    })
}
