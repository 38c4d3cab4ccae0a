use tracing::{debug, warn};

use crate::raster_engine::common::error::{RasterError, Result};
use crate::raster_engine::lut::LookupTable;
use crate::raster_engine::raster::{ChannelLayout, Raster};

/// Divisor base for multilevel bins.
const THRESHOLD_BASE: u32 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdMode {
    /// Binary cut at the given value.
    Simple,
    /// Uniform bucketing into the given number of levels.
    Multilevel,
}

/// Thresholds a grayscale raster.
///
/// In [`ThresholdMode::Simple`] `value` is the cut point: samples below it
/// become 0, the rest 255. In [`ThresholdMode::Multilevel`] `value` is the
/// number of bins, each `floor(255 / value)` wide.
///
/// A non-positive `value` leaves the raster unchanged.
pub fn threshold(raster: &Raster, value: i64, mode: ThresholdMode) -> Result<Raster> {
    match raster.layout() {
        ChannelLayout::Luma => {}
        layout @ (ChannelLayout::Rgb | ChannelLayout::Rgba) => {
            return Err(RasterError::unsupported("threshold", layout));
        }
    }

    if value <= 0 {
        warn!(value, "Threshold value is not positive, leaving raster unchanged");
        return Ok(raster.clone());
    }

    let lut = match mode {
        ThresholdMode::Simple => LookupTable::cutoff(value),
        ThresholdMode::Multilevel => {
            let bins = u32::try_from(value).unwrap_or(u32::MAX);
            LookupTable::binned(THRESHOLD_BASE, bins)
        }
    };
    debug!(value, ?mode, "Applying threshold");

    Ok(lut.apply(raster))
}
