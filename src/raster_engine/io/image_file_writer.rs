use std::io::{Cursor, Write};

use image::{DynamicImage, GrayImage, ImageOutputFormat, RgbImage, RgbaImage};
use tracing::debug;

use crate::raster_engine::common::error::{RasterError, Result};
use crate::raster_engine::config::EngineConfig;
use crate::raster_engine::io::types::{OutputFormat, TiffCompression};
use crate::raster_engine::io::writer::RasterWriter;
use crate::raster_engine::raster::{ChannelLayout, Raster};

/// Writes PNG, JPEG and BMP through the `image` crate and TIFF through the
/// `tiff` encoder so the configured compression applies.
pub struct ImageFileWriter;

impl RasterWriter for ImageFileWriter {
    fn write_raster(
        &self,
        raster: &Raster,
        format: OutputFormat,
        output: &mut dyn Write,
        config: &EngineConfig,
    ) -> Result<()> {
        debug!(
            "Encoding {:?} image: {}x{} {}",
            format,
            raster.width(),
            raster.height(),
            raster.layout()
        );

        let buffer = match format {
            OutputFormat::Tiff => encode_tiff(raster, config)?,
            OutputFormat::Png => encode_with_image(raster, ImageOutputFormat::Png)?,
            OutputFormat::Bmp => encode_with_image(raster, ImageOutputFormat::Bmp)?,
            OutputFormat::Jpeg => {
                encode_with_image(raster, ImageOutputFormat::Jpeg(config.jpeg_quality))?
            }
        };

        output.write_all(&buffer)?;

        debug!("Encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

fn to_dynamic(raster: &Raster) -> Result<DynamicImage> {
    let width = raster.width() as u32;
    let height = raster.height() as u32;
    let samples = raster.samples().to_vec();
    let mismatch = || RasterError::EncodeError("sample buffer does not match dimensions".to_string());

    let image = match raster.layout() {
        ChannelLayout::Luma => {
            DynamicImage::ImageLuma8(GrayImage::from_raw(width, height, samples).ok_or_else(mismatch)?)
        }
        ChannelLayout::Rgb => {
            DynamicImage::ImageRgb8(RgbImage::from_raw(width, height, samples).ok_or_else(mismatch)?)
        }
        ChannelLayout::Rgba => {
            DynamicImage::ImageRgba8(RgbaImage::from_raw(width, height, samples).ok_or_else(mismatch)?)
        }
    };
    Ok(image)
}

fn encode_with_image(raster: &Raster, format: ImageOutputFormat) -> Result<Vec<u8>> {
    let mut image = to_dynamic(raster)?;

    // JPEG has no alpha channel
    if matches!(format, ImageOutputFormat::Jpeg(_)) && raster.layout().has_alpha() {
        image = DynamicImage::ImageRgb8(image.to_rgb8());
    }

    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), format)
        .map_err(|e| RasterError::EncodeError(e.to_string()))?;
    Ok(buffer)
}

fn encode_tiff(raster: &Raster, config: &EngineConfig) -> Result<Vec<u8>> {
    use tiff::encoder::{Compression, TiffEncoder, colortype, compression::DeflateLevel};

    let mut buffer = Vec::new();

    let compression = match config.tiff_compression {
        TiffCompression::None => Compression::Uncompressed,
        TiffCompression::Lzw => Compression::Lzw,
        TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
        TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
        TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
    };

    {
        let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer))
            .map_err(|e| RasterError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.tiff_predictor {
            let predictor = match predictor_val {
                2 => tiff::tags::Predictor::Horizontal,
                _ => tiff::tags::Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        let width = raster.width() as u32;
        let height = raster.height() as u32;
        let written = match raster.layout() {
            ChannelLayout::Luma => encoder.write_image::<colortype::Gray8>(width, height, raster.samples()),
            ChannelLayout::Rgb => encoder.write_image::<colortype::RGB8>(width, height, raster.samples()),
            ChannelLayout::Rgba => encoder.write_image::<colortype::RGBA8>(width, height, raster.samples()),
        };
        written.map_err(|e| RasterError::EncodeError(e.to_string()))?;
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster_engine::io::{ImageFileReader, RasterReader};

    fn rgba() -> Raster {
        Raster::new(2, 1, ChannelLayout::Rgba, vec![1, 2, 3, 4, 250, 251, 252, 253]).unwrap()
    }

    fn encode(raster: &Raster, format: OutputFormat, config: &EngineConfig) -> Vec<u8> {
        let mut out = Vec::new();
        ImageFileWriter
            .write_raster(raster, format, &mut out, config)
            .unwrap();
        out
    }

    #[test]
    fn test_png_round_trip_keeps_alpha() {
        let raster = rgba();
        let bytes = encode(&raster, OutputFormat::Png, &EngineConfig::default());
        assert_eq!(ImageFileReader.read_raster(&bytes).unwrap(), raster);
    }

    #[test]
    fn test_jpeg_drops_alpha() {
        let bytes = encode(&rgba(), OutputFormat::Jpeg, &EngineConfig::default());
        let decoded = ImageFileReader.read_raster(&bytes).unwrap();
        assert_eq!(decoded.layout(), ChannelLayout::Rgb);
        assert_eq!((decoded.width(), decoded.height()), (2, 1));
    }

    #[test]
    fn test_tiff_output_has_header() {
        let config = EngineConfig::builder()
            .tiff_compression(TiffCompression::Lzw)
            .tiff_predictor(Some(2))
            .build();
        let raster = Raster::filled(8, 8, ChannelLayout::Luma, 77).unwrap();
        let bytes = encode(&raster, OutputFormat::Tiff, &config);
        assert!(bytes.starts_with(b"II*\0") || bytes.starts_with(b"MM\0*"));
    }
}
