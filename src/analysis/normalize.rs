//! Timestamp normalization against a reference stamp

use log::debug;

use crate::core::error::{BwlatError, Result};
use crate::core::types::Series;

/// Stamp of the record at `index` in `reference`.
///
/// The default index is 1, the second images timestamp; the first image is
/// usually sent before the stream has settled.
pub fn reference_stamp(reference: &Series, index: usize) -> Result<f64> {
    reference
        .records()
        .get(index)
        .map(|record| record.stamp)
        .ok_or(BwlatError::InsufficientData {
            series: reference.kind(),
            needed: index + 1,
            found: reference.len(),
        })
}

/// Shift both series so that `reference` becomes time zero.
pub fn normalize(odometry: &mut Series, images: &mut Series, reference: f64) {
    debug!("Normalizing timestamps against reference {reference}");
    odometry.shift_stamps(reference);
    images.shift_stamps(reference);
}
