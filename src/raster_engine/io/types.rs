//! Output format and compression types

use std::path::Path;

use crate::raster_engine::common::error::{RasterError, Result};

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression - fast level
    DeflateFast,
    /// Deflate compression - balanced
    DeflateBalanced,
    /// Deflate compression - best compression (slower)
    DeflateBest,
}

impl TiffCompression {
    /// Parses `none`, `lzw`, `deflate` (balanced), `deflate-fast` and
    /// `deflate-best`, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "none" => Some(TiffCompression::None),
            "lzw" => Some(TiffCompression::Lzw),
            "deflate" | "deflate-balanced" => Some(TiffCompression::DeflateBalanced),
            "deflate-fast" => Some(TiffCompression::DeflateFast),
            "deflate-best" => Some(TiffCompression::DeflateBest),
            _ => None,
        }
    }
}

/// Encoded file formats a raster can be saved as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Bmp,
    Tiff,
}

impl OutputFormat {
    /// Infers the format from the file extension of `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "bmp" => Ok(OutputFormat::Bmp),
            "tif" | "tiff" => Ok(OutputFormat::Tiff),
            _ => Err(RasterError::EncodeError(format!(
                "cannot infer an output format from {}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a/b.PNG")).unwrap(), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("x.jpeg")).unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path(Path::new("x.jpg")).unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path(Path::new("x.bmp")).unwrap(), OutputFormat::Bmp);
        assert_eq!(OutputFormat::from_path(Path::new("x.tif")).unwrap(), OutputFormat::Tiff);
        assert!(matches!(
            OutputFormat::from_path(Path::new("x.gif")),
            Err(RasterError::EncodeError(_))
        ));
        assert!(OutputFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_compression_names() {
        assert_eq!(TiffCompression::from_name("LZW"), Some(TiffCompression::Lzw));
        assert_eq!(TiffCompression::from_name("deflate"), Some(TiffCompression::DeflateBalanced));
        assert_eq!(TiffCompression::from_name("zip"), None);
    }
}
