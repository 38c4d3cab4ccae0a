pub mod logger;
pub mod raster_engine;
