use tracing::debug;

use crate::raster_engine::lut::LookupTable;
use crate::raster_engine::raster::Raster;

/// Replaces every intensity sample `s` with `255 - s`.
///
/// Luma and all three color channels are negated; alpha is preserved, so
/// negating twice gives back the input exactly.
pub fn negate(raster: &Raster) -> Raster {
    debug!(layout = %raster.layout(), "Negating raster");
    LookupTable::negation().apply(raster)
}
