use tracing::{debug, warn};

use crate::raster_engine::common::error::{RasterError, Result};
use crate::raster_engine::lut::LookupTable;
use crate::raster_engine::raster::{ChannelLayout, Raster};

/// Divisor base for posterize bins.
const POSTERIZE_BASE: u32 = 256;

/// Reduces each color channel to `bin_count` levels spaced
/// `floor(256 / bin_count)` apart. Only color rasters are accepted.
///
/// A non-positive `bin_count` leaves the raster unchanged.
pub fn posterize(raster: &Raster, bin_count: i64) -> Result<Raster> {
    match raster.layout() {
        ChannelLayout::Rgb | ChannelLayout::Rgba => {}
        ChannelLayout::Luma => return Err(RasterError::unsupported("posterize", ChannelLayout::Luma)),
    }

    if bin_count <= 0 {
        warn!(bin_count, "Bin count is not positive, leaving raster unchanged");
        return Ok(raster.clone());
    }

    let bins = u32::try_from(bin_count).unwrap_or(u32::MAX);
    debug!(bins, "Posterizing raster");
    Ok(LookupTable::binned(POSTERIZE_BASE, bins).apply(raster))
}
