use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::constants::{inputs, units};

/// Which transmission log a series came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Odometry,
    Images,
}

impl SeriesKind {
    /// Both kinds, in reporting order
    pub const ALL: [SeriesKind; 2] = [SeriesKind::Odometry, SeriesKind::Images];

    /// Lowercase identifier used in logs, JSON and exported CSV
    pub fn name(&self) -> &'static str {
        match self {
            SeriesKind::Odometry => "odometry",
            SeriesKind::Images => "images",
        }
    }

    /// Capitalized label used in human-readable output
    pub fn label(&self) -> &'static str {
        match self {
            SeriesKind::Odometry => "Odometry",
            SeriesKind::Images => "Images",
        }
    }

    /// File name of this log inside a stats directory
    pub fn file_name(&self) -> &'static str {
        match self {
            SeriesKind::Odometry => inputs::ODOMETRY_FILE,
            SeriesKind::Images => inputs::IMAGES_FILE,
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One transmitted message.
///
/// Field names match the CSV header written by the recorder, so rows
/// deserialize directly into this type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Send time in seconds
    pub stamp: f64,
    /// Payload size in bytes
    pub size: u64,
    /// End-to-end latency in seconds
    pub latency: f64,
}

impl Record {
    pub fn new(stamp: f64, size: u64, latency: f64) -> Self {
        Self {
            stamp,
            size,
            latency,
        }
    }

    /// Latency converted to milliseconds
    pub fn latency_ms(&self) -> f64 {
        self.latency * units::MS_PER_SECOND
    }
}

/// Records of one log in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    kind: SeriesKind,
    records: Vec<Record>,
}

impl Series {
    pub fn new(kind: SeriesKind, records: Vec<Record>) -> Self {
        Self { kind, records }
    }

    /// Build a series from `(stamp, size, latency)` tuples
    pub fn from_tuples(kind: SeriesKind, tuples: &[(f64, u64, f64)]) -> Self {
        let records = tuples
            .iter()
            .map(|&(stamp, size, latency)| Record::new(stamp, size, latency))
            .collect();
        Self::new(kind, records)
    }

    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stamps(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.stamp).collect()
    }

    pub fn latencies_ms(&self) -> Vec<f64> {
        self.records.iter().map(Record::latency_ms).collect()
    }

    /// Subtract `offset` from every stamp
    pub fn shift_stamps(&mut self, offset: f64) {
        for record in &mut self.records {
            record.stamp -= offset;
        }
    }
}
