use crate::raster_engine::common::error::Result;
use crate::raster_engine::raster::Raster;

pub trait RasterReader {
    fn read_raster(&self, data: &[u8]) -> Result<Raster>;
}
