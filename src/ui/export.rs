//! CSV export of chart data

use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::analysis::{LatencyAnalysis, Resampled};
use crate::core::error::{BwlatError, Result};
use crate::core::types::SeriesKind;

#[derive(Serialize)]
struct BandwidthRow {
    stamp: f64,
    odometry_mbps: f64,
    images_mbps: f64,
    total_mbps: f64,
}

#[derive(Serialize)]
struct LatencyRow {
    series: SeriesKind,
    stamp: f64,
    latency_ms: f64,
}

/// Write resampled bandwidth, one row per grid point. Returns the row count.
pub fn export_bandwidth<W: Write>(writer: W, resampled: &Resampled) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(writer);
    let rows = resampled
        .grid
        .iter()
        .zip(&resampled.odometry)
        .zip(&resampled.images)
        .zip(&resampled.total);

    let mut count = 0;
    for (((&stamp, &odometry_mbps), &images_mbps), &total_mbps) in rows {
        writer.serialize(BandwidthRow {
            stamp,
            odometry_mbps,
            images_mbps,
            total_mbps,
        })?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Write normalized latency, one row per record of both series. Returns the
/// row count.
pub fn export_latency<W: Write>(writer: W, analysis: &LatencyAnalysis) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(writer);

    let mut count = 0;
    for series in [&analysis.odometry, &analysis.images] {
        for record in series.records() {
            writer.serialize(LatencyRow {
                series: series.kind(),
                stamp: record.stamp,
                latency_ms: record.latency_ms(),
            })?;
            count += 1;
        }
    }
    writer.flush()?;
    Ok(count)
}

/// Create the export file, naming it in the error on failure
pub fn create_export_file(path: &str) -> Result<File> {
    let file = File::create(Path::new(path)).map_err(|e| {
        BwlatError::Io(io::Error::new(
            e.kind(),
            format!("could not create export file '{path}': {e}"),
        ))
    })?;
    info!("Writing chart data to {path}");
    Ok(file)
}
