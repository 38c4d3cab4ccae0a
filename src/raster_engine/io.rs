//! Decode and encode collaborators
//!
//! Readers turn encoded file bytes into a [`Raster`](crate::raster_engine::Raster);
//! writers do the reverse for a destination format inferred from a path.

mod reader;
mod writer;
mod image_file_reader;
mod image_file_writer;
pub mod types;

pub use reader::RasterReader;
pub use writer::RasterWriter;
pub use image_file_reader::ImageFileReader;
pub use image_file_writer::ImageFileWriter;
pub use types::{OutputFormat, TiffCompression};
