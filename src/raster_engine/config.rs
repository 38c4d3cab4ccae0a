//! Engine configuration types

use std::path::PathBuf;

use crate::raster_engine::io::TiffCompression;

/// Number of points sampled along a line profile unless configured otherwise.
pub const DEFAULT_PROFILE_SAMPLES: usize = 100;

/// Configuration shared by a session and its reader/writer.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Whether imported rasters are checked against the dimension limits
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validating
    pub max_dimension: Option<usize>,
    /// Directory that `Session::save` writes named files into
    pub output_dir: PathBuf,
    /// JPEG encoder quality, 1..=100
    pub jpeg_quality: u8,
    /// Compression used for TIFF output
    pub tiff_compression: TiffCompression,
    /// Predictor value for TIFF compression (2 for horizontal differencing)
    pub tiff_predictor: Option<u16>,
    /// Points sampled along a line profile
    pub profile_samples: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            validate_dimensions: true,
            max_dimension: Some(50000),
            output_dir: PathBuf::from("output"),
            jpeg_quality: 90,
            tiff_compression: TiffCompression::None,
            tiff_predictor: None,
            profile_samples: DEFAULT_PROFILE_SAMPLES,
        }
    }
}

impl EngineConfig {
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

/// Builder for EngineConfig
#[derive(Default)]
pub struct EngineConfigBuilder {
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    output_dir: Option<PathBuf>,
    jpeg_quality: Option<u8>,
    tiff_compression: Option<TiffCompression>,
    tiff_predictor: Option<Option<u16>>,
    profile_samples: Option<usize>,
}

impl EngineConfigBuilder {
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = Some(quality.clamp(1, 100));
        self
    }

    pub fn tiff_compression(mut self, compression: TiffCompression) -> Self {
        self.tiff_compression = Some(compression);
        self
    }

    pub fn tiff_predictor(mut self, predictor: Option<u16>) -> Self {
        self.tiff_predictor = Some(predictor);
        self
    }

    pub fn profile_samples(mut self, samples: usize) -> Self {
        self.profile_samples = Some(samples);
        self
    }

    pub fn build(self) -> EngineConfig {
        let default = EngineConfig::default();
        EngineConfig {
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
            jpeg_quality: self.jpeg_quality.unwrap_or(default.jpeg_quality),
            tiff_compression: self.tiff_compression.unwrap_or(default.tiff_compression),
            tiff_predictor: self.tiff_predictor.unwrap_or(default.tiff_predictor),
            profile_samples: self.profile_samples.unwrap_or(default.profile_samples),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = EngineConfig::builder()
            .tiff_compression(TiffCompression::DeflateBest)
            .tiff_predictor(Some(2))
            .validate_dimensions(false)
            .max_dimension(None)
            .jpeg_quality(0)
            .output_dir("exports")
            .build();

        assert!(matches!(config.tiff_compression, TiffCompression::DeflateBest));
        assert_eq!(config.tiff_predictor, Some(2));
        assert!(!config.validate_dimensions);
        assert_eq!(config.max_dimension, None);
        assert_eq!(config.jpeg_quality, 1);
        assert_eq!(config.output_dir, PathBuf::from("exports"));
        assert_eq!(config.profile_samples, DEFAULT_PROFILE_SAMPLES);
    }
}
