//! Raster reader backed by the `image` crate.
//!
//! Decodes JPEG, PNG and BMP files. Palette images are expanded by the
//! decoder to RGB or RGBA; 8-bit gray, RGB and RGBA are accepted as is and any
//! other pixel format (16-bit, gray with alpha, float) is rejected.

use image::DynamicImage;
use tracing::debug;

use crate::raster_engine::common::error::{RasterError, Result};
use crate::raster_engine::io::reader::RasterReader;
use crate::raster_engine::raster::{ChannelLayout, Raster};

pub struct ImageFileReader;

impl RasterReader for ImageFileReader {
    fn read_raster(&self, data: &[u8]) -> Result<Raster> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| RasterError::DecodeError(e.to_string()))?;

        let (width, height, layout, samples) = match decoded {
            DynamicImage::ImageLuma8(img) => (img.width(), img.height(), ChannelLayout::Luma, img.into_raw()),
            DynamicImage::ImageRgb8(img) => (img.width(), img.height(), ChannelLayout::Rgb, img.into_raw()),
            DynamicImage::ImageRgba8(img) => (img.width(), img.height(), ChannelLayout::Rgba, img.into_raw()),
            other => {
                return Err(RasterError::unsupported("decode", format!("{:?}", other.color())));
            }
        };

        debug!("Decoded image: {}x{} {}", width, height, layout);
        Raster::new(width as usize, height as usize, layout, samples)
    }
}
