//! Raster data types

use std::fmt;

use crate::raster_engine::common::error::{RasterError, Result};

/// Declared interpretation of the samples of one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// Single-channel grayscale
    Luma,
    /// Three interleaved color channels
    Rgb,
    /// Three color channels followed by alpha
    Rgba,
}

impl ChannelLayout {
    pub fn channel_count(self) -> usize {
        match self {
            ChannelLayout::Luma => 1,
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }

    /// Number of leading channels that carry intensity (alpha excluded).
    pub fn color_channel_count(self) -> usize {
        match self {
            ChannelLayout::Luma => 1,
            ChannelLayout::Rgb | ChannelLayout::Rgba => 3,
        }
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, ChannelLayout::Rgba)
    }

    /// Parses the conventional mode names `L`, `RGB` and `RGBA`.
    pub fn from_mode(mode: &str) -> Result<Self> {
        match mode {
            "L" => Ok(ChannelLayout::Luma),
            "RGB" => Ok(ChannelLayout::Rgb),
            "RGBA" => Ok(ChannelLayout::Rgba),
            other => Err(RasterError::unsupported("raster", other)),
        }
    }

    pub fn mode(self) -> &'static str {
        match self {
            ChannelLayout::Luma => "L",
            ChannelLayout::Rgb => "RGB",
            ChannelLayout::Rgba => "RGBA",
        }
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mode())
    }
}

/// Integer pixel coordinate, `x` along a row and `y` down the columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Decoded image held in memory.
///
/// Samples are row-major and channel-interleaved. A `Raster` is never
/// modified after construction; transforms always build a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    layout: ChannelLayout,
    samples: Vec<u8>,
}

impl Raster {
    /// Builds a raster, checking that both dimensions are positive and that
    /// the buffer holds exactly `width * height * channels` samples.
    pub fn new(width: usize, height: usize, layout: ChannelLayout, samples: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions(width, height));
        }

        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(layout.channel_count()))
            .ok_or(RasterError::InvalidDimensions(width, height))?;

        if samples.len() != expected {
            return Err(RasterError::BufferSizeMismatch {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            width,
            height,
            layout,
            samples,
        })
    }

    /// Raster with every sample set to `value`.
    pub fn filled(width: usize, height: usize, layout: ChannelLayout, value: u8) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(layout.channel_count()))
            .ok_or(RasterError::InvalidDimensions(width, height))?;
        Self::new(width, height, layout, vec![value; len])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    pub fn channel_count(&self) -> usize {
        self.layout.channel_count()
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Channel samples of the pixel at `(x, y)`, or `None` outside the
    /// raster.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let channels = self.channel_count();
        let start = (y * self.width + x) * channels;
        self.samples.get(start..start + channels)
    }

    pub fn sample(&self, x: usize, y: usize, channel: usize) -> Option<u8> {
        self.pixel(x, y)?.get(channel).copied()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Builds a raster of the same shape from a new sample buffer of the
    /// same length.
    pub(crate) fn with_samples(&self, samples: Vec<u8>) -> Self {
        debug_assert_eq!(samples.len(), self.samples.len());
        Self {
            width: self.width,
            height: self.height,
            layout: self.layout,
            samples,
        }
    }
}
