//! Bandwidth and latency analysis
//!
//! The analysis is a linear pipeline over two logs: load, derive
//! bandwidth, normalize timestamps, resample onto a shared grid, and
//! finally summarize or chart. Each step lives in its own submodule as a
//! plain function over [`Series`]; this module wires them together for the
//! three reporting modes.

pub mod bandwidth;
pub mod loader;
pub mod normalize;
pub mod resample;
pub mod stats;

use serde::Serialize;
use std::path::Path;

use crate::core::error::Result;
use crate::core::types::{Series, SeriesKind};
use crate::reporting::logging;

pub use bandwidth::{Bandwidth, compute_bandwidth, fill_missing};
pub use loader::{load_series, load_series_from_reader};
pub use normalize::{normalize, reference_stamp};
pub use resample::{Resampled, interpolate, resample, unified_grid};
pub use stats::Stats;

/// The odometry and images logs of one recording
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub odometry: Series,
    pub images: Series,
}

impl Dataset {
    pub fn new(odometry: Series, images: Series) -> Self {
        Self { odometry, images }
    }

    /// Load both logs from disk
    pub fn load(odometry_path: &Path, images_path: &Path) -> Result<Self> {
        let odometry = load_series(SeriesKind::Odometry, odometry_path)?;
        logging::log_series_loaded(SeriesKind::Odometry, odometry.len(), odometry_path);
        let images = load_series(SeriesKind::Images, images_path)?;
        logging::log_series_loaded(SeriesKind::Images, images.len(), images_path);
        Ok(Self::new(odometry, images))
    }

    /// Both series shifted so the reference image stamp is time zero
    fn normalized(&self, reference_index: usize) -> Result<(f64, Series, Series)> {
        let reference = reference_stamp(&self.images, reference_index)?;
        logging::log_reference(reference, reference_index);

        let mut odometry = self.odometry.clone();
        let mut images = self.images.clone();
        normalize(&mut odometry, &mut images, reference);
        Ok((reference, odometry, images))
    }
}

/// Number of zero or negative time gaps found in each series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnomalyCounts {
    pub odometry: usize,
    pub images: usize,
}

impl AnomalyCounts {
    fn from_bandwidth(odometry: &Bandwidth, images: &Bandwidth) -> Self {
        Self {
            odometry: report_anomalies(odometry),
            images: report_anomalies(images),
        }
    }

    pub fn total(&self) -> usize {
        self.odometry + self.images
    }

    pub fn get(&self, kind: SeriesKind) -> usize {
        match kind {
            SeriesKind::Odometry => self.odometry,
            SeriesKind::Images => self.images,
        }
    }
}

fn report_anomalies(bandwidth: &Bandwidth) -> usize {
    let indices = bandwidth.anomalies();
    if !indices.is_empty() {
        logging::log_anomalies(bandwidth.kind(), &indices);
    }
    indices.len()
}

/// Resampled bandwidth on the normalized time axis
#[derive(Debug, Clone, PartialEq)]
pub struct BandwidthAnalysis {
    pub reference: f64,
    pub resampled: Resampled,
    pub anomalies: AnomalyCounts,
}

/// Normalized series for the latency chart
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyAnalysis {
    pub reference: f64,
    pub odometry: Series,
    pub images: Series,
}

impl LatencyAnalysis {
    /// Largest stamp of either series
    pub fn max_stamp(&self) -> Option<f64> {
        unified_grid(&self.odometry.stamps(), &self.images.stamps())
            .last()
            .copied()
    }

    /// Largest latency of either series in milliseconds
    pub fn max_latency_ms(&self) -> Option<f64> {
        self.odometry
            .latencies_ms()
            .into_iter()
            .chain(self.images.latencies_ms())
            .filter(|v| !v.is_nan())
            .reduce(f64::max)
    }
}

/// Statistics printed in summary mode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_bandwidth_mbps: Stats,
    pub odometry_latency_ms: Stats,
    pub images_latency_ms: Stats,
    pub anomalies: AnomalyCounts,
}

/// Derive, normalize and resample bandwidth for the bandwidth chart.
pub fn analyze_bandwidth(dataset: &Dataset, reference_index: usize) -> Result<BandwidthAnalysis> {
    let odometry_bw = compute_bandwidth(&dataset.odometry);
    let images_bw = compute_bandwidth(&dataset.images);
    let anomalies = AnomalyCounts::from_bandwidth(&odometry_bw, &images_bw);

    let (reference, odometry, images) = dataset.normalized(reference_index)?;
    let resampled = resample(&odometry, &odometry_bw, &images, &images_bw)?;
    logging::log_grid(resampled.grid.len());

    Ok(BandwidthAnalysis {
        reference,
        resampled,
        anomalies,
    })
}

/// Normalize both series for the latency chart.
pub fn analyze_latency(dataset: &Dataset, reference_index: usize) -> Result<LatencyAnalysis> {
    let (reference, odometry, images) = dataset.normalized(reference_index)?;
    Ok(LatencyAnalysis {
        reference,
        odometry,
        images,
    })
}

/// Compute summary statistics.
///
/// Timestamps are not normalized here: a constant shift changes neither the
/// gaps nor the interpolated values, so the images series needs no
/// reference record.
pub fn summarize(dataset: &Dataset) -> Result<Summary> {
    let odometry_bw = compute_bandwidth(&dataset.odometry);
    let images_bw = compute_bandwidth(&dataset.images);
    let anomalies = AnomalyCounts::from_bandwidth(&odometry_bw, &images_bw);

    let resampled = resample(&dataset.odometry, &odometry_bw, &dataset.images, &images_bw)?;
    logging::log_grid(resampled.grid.len());

    Ok(Summary {
        total_bandwidth_mbps: Stats::from_values(&resampled.total),
        odometry_latency_ms: Stats::from_values(&dataset.odometry.latencies_ms()),
        images_latency_ms: Stats::from_values(&dataset.images.latencies_ms()),
        anomalies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::BwlatError;
    use std::io::Write;

    fn scenario() -> Dataset {
        Dataset::new(
            Series::from_tuples(
                SeriesKind::Odometry,
                &[(0.0, 1000, 0.01), (1.0, 2000, 0.02)],
            ),
            Series::from_tuples(
                SeriesKind::Images,
                &[(0.0, 500, 0.005), (1.0, 600, 0.006), (2.0, 700, 0.007)],
            ),
        )
    }

    #[test]
    fn test_analyze_bandwidth_normalizes_grid() -> Result<()> {
        let analysis = analyze_bandwidth(&scenario(), 1)?;

        assert_eq!(analysis.reference, 1.0);
        assert_eq!(analysis.resampled.grid, vec![-1.0, 0.0, 1.0]);
        assert!((analysis.resampled.odometry[1] - 0.016).abs() < 1e-12);
        assert!((analysis.resampled.images[2] - 0.0056).abs() < 1e-12);
        assert_eq!(analysis.anomalies, AnomalyCounts::default());
        Ok(())
    }

    #[test]
    fn test_analyze_bandwidth_needs_reference_image() {
        let mut dataset = scenario();
        dataset.images = Series::from_tuples(SeriesKind::Images, &[(0.0, 500, 0.005)]);

        assert!(matches!(
            analyze_bandwidth(&dataset, 1),
            Err(BwlatError::InsufficientData {
                series: SeriesKind::Images,
                needed: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_analyze_latency() -> Result<()> {
        let analysis = analyze_latency(&scenario(), 1)?;

        assert_eq!(analysis.odometry.stamps(), vec![-1.0, 0.0]);
        assert_eq!(analysis.images.stamps(), vec![-1.0, 0.0, 1.0]);
        assert_eq!(analysis.max_stamp(), Some(1.0));
        assert!((analysis.max_latency_ms().unwrap() - 20.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_summarize_scenario() -> Result<()> {
        let summary = summarize(&scenario())?;

        // grid [0, 1, 2]: totals 0.0, 0.0208, 0.0216
        let totals = [0.0, 0.0208, 0.0216];
        let expected = Stats::from_values(&totals);
        assert!((summary.total_bandwidth_mbps.mean - expected.mean).abs() < 1e-12);
        assert!((summary.total_bandwidth_mbps.stdev - expected.stdev).abs() < 1e-12);
        assert_eq!(summary.total_bandwidth_mbps.count, 3);

        assert!((summary.odometry_latency_ms.mean - 15.0).abs() < 1e-9);
        assert!((summary.images_latency_ms.mean - 6.0).abs() < 1e-9);
        assert!((summary.images_latency_ms.stdev - 1.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_summarize_single_image_is_allowed() -> Result<()> {
        let mut dataset = scenario();
        dataset.images = Series::from_tuples(SeriesKind::Images, &[(0.5, 500, 0.005)]);

        let summary = summarize(&dataset)?;
        assert_eq!(summary.images_latency_ms.count, 1);
        assert!(summary.images_latency_ms.stdev.is_nan());
        Ok(())
    }

    #[test]
    fn test_summarize_counts_anomalies() -> Result<()> {
        let mut dataset = scenario();
        dataset.odometry = Series::from_tuples(
            SeriesKind::Odometry,
            &[
                (0.0, 1000, 0.01),
                (1.0, 1000, 0.01),
                (1.0, 1000, 0.01),
                (2.0, 1000, 0.01),
            ],
        );

        let summary = summarize(&dataset)?;
        assert_eq!(summary.anomalies.odometry, 1);
        assert_eq!(summary.anomalies.get(SeriesKind::Images), 0);
        assert_eq!(summary.anomalies.total(), 1);
        assert_eq!(summary.total_bandwidth_mbps.mean, f64::INFINITY);
        Ok(())
    }

    #[test]
    fn test_summarize_keeps_infinite_bandwidth_at_repeated_first_stamp() -> Result<()> {
        let mut dataset = scenario();
        dataset.odometry = Series::from_tuples(
            SeriesKind::Odometry,
            &[(0.0, 1000, 0.01), (0.0, 1000, 0.01), (1.0, 1000, 0.01)],
        );

        let summary = summarize(&dataset)?;
        assert_eq!(summary.anomalies.odometry, 1);
        assert_eq!(summary.total_bandwidth_mbps.mean, f64::INFINITY);
        assert!(summary.total_bandwidth_mbps.stdev.is_nan());
        Ok(())
    }

    #[test]
    fn test_summarize_empty_odometry() {
        let mut dataset = scenario();
        dataset.odometry = Series::new(SeriesKind::Odometry, Vec::new());

        assert!(matches!(
            summarize(&dataset),
            Err(BwlatError::InsufficientData {
                series: SeriesKind::Odometry,
                ..
            })
        ));
    }

    #[test]
    fn test_dataset_load() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let odometry_path = dir.path().join("odometry.csv");
        let images_path = dir.path().join("images.csv");
        std::fs::File::create(&odometry_path)?
            .write_all(b"stamp,size,latency\n0,1000,0.01\n1,2000,0.02\n")?;
        std::fs::File::create(&images_path)?
            .write_all(b"stamp,size,latency\n0,500,0.005\n1,600,0.006\n2,700,0.007\n")?;

        let dataset = Dataset::load(&odometry_path, &images_path)?;
        assert_eq!(dataset, scenario());
        Ok(())
    }
}
