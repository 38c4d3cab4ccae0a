use std::io::Write;

use crate::raster_engine::common::error::Result;
use crate::raster_engine::config::EngineConfig;
use crate::raster_engine::io::types::OutputFormat;
use crate::raster_engine::raster::Raster;

pub trait RasterWriter {
    fn write_raster(
        &self,
        raster: &Raster,
        format: OutputFormat,
        output: &mut dyn Write,
        config: &EngineConfig,
    ) -> Result<()>;
}
