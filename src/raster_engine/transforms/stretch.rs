use tracing::debug;

use crate::raster_engine::common::error::{RasterError, Result};
use crate::raster_engine::histogram::{HistogramChannel, build_histogram};
use crate::raster_engine::lut::LookupTable;
use crate::raster_engine::raster::{ChannelLayout, Raster};

/// Explicit stretch range: `[start, end]` in the source is mapped linearly
/// onto the output, saturated into `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StretchParams {
    pub start: i64,
    pub end: i64,
    pub low: i64,
    pub high: i64,
}

impl StretchParams {
    pub fn new(start: i64, end: i64, low: i64, high: i64) -> Self {
        Self { start, end, low, high }
    }

    /// Full-range stretch of the occupied part of the histogram: `start` and
    /// `end` are the lowest and highest values present, output is 0..=255.
    pub fn auto(raster: &Raster) -> Result<Self> {
        let histogram = build_histogram(raster);
        let table = histogram
            .table(HistogramChannel::Luma)
            .ok_or_else(|| RasterError::unsupported("stretch", raster.layout()))?;

        // A raster always has at least one pixel, so both bounds exist.
        let start = table.min_value().unwrap_or(0);
        let end = table.max_value().unwrap_or(0);

        Ok(Self::new(i64::from(start), i64::from(end), 0, 255))
    }
}

/// Stretches the contrast of a grayscale raster. With `params` of `None` the
/// range is derived from the raster's own histogram.
///
/// Fails with [`RasterError::DivisionByZero`] when the source range is empty,
/// for example on a raster with a single distinct value in auto mode.
pub fn stretch(raster: &Raster, params: Option<StretchParams>) -> Result<Raster> {
    match raster.layout() {
        ChannelLayout::Luma => {}
        layout @ (ChannelLayout::Rgb | ChannelLayout::Rgba) => {
            return Err(RasterError::unsupported("stretch", layout));
        }
    }

    let params = match params {
        Some(p) => p,
        None => StretchParams::auto(raster)?,
    };
    debug!(?params, "Stretching histogram");

    let lut = LookupTable::linear_stretch(params.start, params.end, params.low, params.high)?;
    Ok(lut.apply(raster))
}
