//! Line profiles: intensity sampled along a straight segment.

use tracing::debug;

use crate::raster_engine::common::error::{RasterError, Result};
use crate::raster_engine::raster::{ChannelLayout, Point, Raster};

/// Rec. 601 luma weights used to project color pixels onto one value.
const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Which scalar a profile reads from each pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileSource {
    /// The luma channel of a grayscale raster, or the weighted luma of a
    /// color one.
    #[default]
    Luma,
    /// A single channel by index.
    Channel(usize),
}

impl ProfileSource {
    fn value_at(self, raster: &Raster, x: usize, y: usize) -> Option<f64> {
        let pixel = raster.pixel(x, y)?;
        match (self, raster.layout()) {
            (ProfileSource::Channel(c), _) => pixel.get(c).map(|&s| f64::from(s)),
            (ProfileSource::Luma, ChannelLayout::Luma) => pixel.first().map(|&s| f64::from(s)),
            (ProfileSource::Luma, ChannelLayout::Rgb | ChannelLayout::Rgba) => Some(
                pixel
                    .iter()
                    .zip(LUMA_WEIGHTS)
                    .map(|(&s, w)| f64::from(s) * w)
                    .sum(),
            ),
        }
    }
}

/// Samples `sample_count` evenly spaced points from `start` to `end`
/// (both included), bilinearly interpolating between pixel centers.
pub fn sample_profile(
    raster: &Raster,
    start: Point,
    end: Point,
    sample_count: usize,
    source: ProfileSource,
) -> Result<Vec<f64>> {
    for point in [start, end] {
        if !raster.contains(point) {
            return Err(RasterError::OutOfBounds {
                x: point.x,
                y: point.y,
                width: raster.width(),
                height: raster.height(),
            });
        }
    }

    if sample_count == 0 {
        return Err(RasterError::InvalidParameter(
            "profile needs at least one sample".to_string(),
        ));
    }

    if let ProfileSource::Channel(c) = source {
        if c >= raster.channel_count() {
            return Err(RasterError::InvalidParameter(format!(
                "channel {} does not exist in a {} raster",
                c,
                raster.layout()
            )));
        }
    }

    let (x0, y0) = (start.x as f64, start.y as f64);
    let (x1, y1) = (end.x as f64, end.y as f64);
    let steps = sample_count.saturating_sub(1).max(1) as f64;

    let profile = (0..sample_count)
        .map(|i| {
            let t = i as f64 / steps;
            bilinear(raster, source, x0 + (x1 - x0) * t, y0 + (y1 - y0) * t)
        })
        .collect::<Option<Vec<f64>>>()
        .ok_or(RasterError::OutOfBounds {
            x: end.x,
            y: end.y,
            width: raster.width(),
            height: raster.height(),
        })?;

    debug!(?start, ?end, sample_count, "Sampled line profile");
    Ok(profile)
}

fn bilinear(raster: &Raster, source: ProfileSource, x: f64, y: f64) -> Option<f64> {
    let max_x = raster.width() - 1;
    let max_y = raster.height() - 1;

    let xa = (x.floor() as usize).min(max_x);
    let ya = (y.floor() as usize).min(max_y);
    let xb = (xa + 1).min(max_x);
    let yb = (ya + 1).min(max_y);
    let fx = x - xa as f64;
    let fy = y - ya as f64;

    let top = source.value_at(raster, xa, ya)? * (1.0 - fx) + source.value_at(raster, xb, ya)? * fx;
    let bottom = source.value_at(raster, xa, yb)? * (1.0 - fx) + source.value_at(raster, xb, yb)? * fx;
    Some(top * (1.0 - fy) + bottom * fy)
}
