//! 256-entry lookup tables for point transforms.
//!
//! Every point transform in the engine reduces to building a [`LookupTable`]
//! from its parameters and remapping each intensity sample through it. Alpha
//! samples are never remapped.

use rayon::prelude::*;

use crate::raster_engine::common::error::{RasterError, Result};
use crate::raster_engine::raster::Raster;

/// Total mapping from an input sample value to an output sample value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    entries: [u8; 256],
}

impl LookupTable {
    pub fn from_fn<F: Fn(u8) -> u8>(f: F) -> Self {
        let mut entries = [0u8; 256];
        for (value, entry) in entries.iter_mut().enumerate() {
            *entry = f(value as u8);
        }
        Self { entries }
    }

    pub fn identity() -> Self {
        Self::from_fn(|v| v)
    }

    /// `255 - v` for every value.
    pub fn negation() -> Self {
        Self::from_fn(|v| 255 - v)
    }

    /// Binary cut: 0 below `cutoff`, 255 at or above it.
    pub fn cutoff(cutoff: i64) -> Self {
        Self::from_fn(|v| if i64::from(v) < cutoff { 0 } else { 255 })
    }

    /// Uniform bucketing of 0..=255 into `bin_count` bins.
    ///
    /// The bin width is `base / bin_count` (integer division); a value falls
    /// into bin `min(v / width, bin_count - 1)`, so the last bin absorbs the
    /// remainder, and the bin's level is `width * index`. `bin_count` is
    /// clamped into `1..=base`.
    pub fn binned(base: u32, bin_count: u32) -> Self {
        let bin_count = bin_count.clamp(1, base.max(1));
        let width = base / bin_count;
        Self::from_fn(|v| {
            let index = (u32::from(v) / width).min(bin_count - 1);
            (width * index) as u8
        })
    }

    /// Linear remap of `[start, end]` onto `[0, high]`, saturated into
    /// `[low, high]`.
    ///
    /// Values below `low` map to `low`, values above `high` map to `high`,
    /// everything else to `floor((v - start) * high / (end - start))`
    /// clamped into `[low, high]`.
    pub fn linear_stretch(start: i64, end: i64, low: i64, high: i64) -> Result<Self> {
        if !(0..=255).contains(&low) || !(0..=255).contains(&high) || low > high {
            return Err(RasterError::InvalidParameter(format!(
                "stretch output range [{}, {}] must lie within [0, 255] with low <= high",
                low, high
            )));
        }

        // Bounds come from user text; i128 holds any i64 difference and product.
        let (start, end, low, high) = (
            i128::from(start),
            i128::from(end),
            i128::from(low),
            i128::from(high),
        );
        let span = end - start;
        if span == 0 {
            return Err(RasterError::DivisionByZero(format!(
                "stretch source range is empty (start = end = {})",
                start
            )));
        }

        Ok(Self::from_fn(|v| {
            let v = i128::from(v);
            let out = if v < low {
                low
            } else if v > high {
                high
            } else {
                ((v - start) * high).div_euclid(span).clamp(low, high)
            };
            out as u8
        }))
    }

    pub fn get(&self, value: u8) -> u8 {
        self.entries[value as usize]
    }

    pub fn entries(&self) -> &[u8; 256] {
        &self.entries
    }

    /// Remaps the intensity channels of `raster` into a new raster. Alpha is
    /// copied unchanged. Rows are processed in parallel.
    pub fn apply(&self, raster: &Raster) -> Raster {
        let channels = raster.channel_count();
        let color_channels = raster.layout().color_channel_count();
        let stride = raster.width() * channels;

        let mut samples = raster.samples().to_vec();
        samples.par_chunks_mut(stride).for_each(|row| {
            for pixel in row.chunks_exact_mut(channels) {
                for sample in &mut pixel[..color_channels] {
                    *sample = self.entries[*sample as usize];
                }
            }
        });

        raster.with_samples(samples)
    }
}
