use std::io::Write;

use crate::raster_engine::common::error::Result;
use crate::raster_engine::histogram::Histogram;
use crate::raster_engine::raster::Raster;

/// Display surface for rasters, histograms and line profiles.
pub trait Presenter {
    fn show_raster(&mut self, raster: &Raster, title: &str) -> Result<()>;
    fn show_histogram(&mut self, histogram: &Histogram) -> Result<()>;
    fn show_profile(&mut self, profile: &[f64]) -> Result<()>;
}

/// Plain-text presenter for terminals and pipes.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn show_raster(&mut self, raster: &Raster, title: &str) -> Result<()> {
        writeln!(
            self.out,
            "RasterLab: {} ({}x{}, {})",
            title,
            raster.width(),
            raster.height(),
            raster.layout()
        )?;
        Ok(())
    }

    fn show_histogram(&mut self, histogram: &Histogram) -> Result<()> {
        self.out.write_all(histogram.to_text_table().as_bytes())?;
        Ok(())
    }

    fn show_profile(&mut self, profile: &[f64]) -> Result<()> {
        for value in profile {
            writeln!(self.out, "{:.3}", value)?;
        }
        Ok(())
    }
}
