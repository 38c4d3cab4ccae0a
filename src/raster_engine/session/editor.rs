use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::raster_engine::{
    common::{
        error::{RasterError, Result},
        params::{parse_int_param, parse_optional_int_param},
    },
    config::EngineConfig,
    histogram::{Histogram, build_histogram},
    io::{ImageFileReader, ImageFileWriter, OutputFormat, RasterReader, RasterWriter},
    profile::{ProfileSource, sample_profile},
    raster::{Point, Raster},
    session::focus::{FocusState, FocusedRaster, ProfileSelection},
    transforms::{Operation, StretchParams, ThresholdMode},
};

/// Threshold value used when the input field is left empty.
const DEFAULT_THRESHOLD_VALUE: i64 = 2;

/// One editing session: the opened rasters (most recent first), the focus
/// state, and the collaborators used to read and write files.
///
/// Every operation either succeeds completely or leaves the session as it
/// was.
pub struct Session<R: RasterReader, W: RasterWriter> {
    reader: R,
    writer: W,
    config: EngineConfig,
    opened: Vec<FocusedRaster>,
    focus: FocusState,
}

impl Session<ImageFileReader, ImageFileWriter> {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_custom(ImageFileReader, ImageFileWriter, config)
    }
}

impl<R: RasterReader, W: RasterWriter> Session<R, W> {
    pub fn with_custom(reader: R, writer: W, config: EngineConfig) -> Self {
        Self {
            reader,
            writer,
            config,
            opened: Vec::new(),
            focus: FocusState::new(),
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(width, height, max, "Image dimensions exceed maximum");
                return Err(RasterError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Reads and decodes a file, then opens and focuses it.
    #[instrument(skip(self, path))]
    pub fn import<P: AsRef<Path>>(&mut self, path: P) -> Result<Arc<Raster>> {
        let path = path.as_ref();
        info!(input = %path.display(), "Importing image");

        let data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(path).map_err(|e| {
                RasterError::InputReadError(format!("{}: {}", path.display(), e))
            })?
        };

        self.import_bytes(Some(path.to_path_buf()), &data)
    }

    /// Decodes encoded image bytes, then opens and focuses the result.
    #[instrument(skip(self, path, data), fields(input_size = data.len()))]
    pub fn import_bytes(&mut self, path: Option<PathBuf>, data: &[u8]) -> Result<Arc<Raster>> {
        let raster = {
            let _span = tracing::info_span!("decode").entered();
            self.reader.read_raster(data)?
        };

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = raster.width(),
                height = raster.height()
            )
            .entered();
            self.validate_dimensions(raster.width(), raster.height())?;
        }

        Ok(self.open(path, raster))
    }

    /// Adds a raster to the opened list and focuses it.
    pub fn open(&mut self, path: Option<PathBuf>, raster: Raster) -> Arc<Raster> {
        let raster = Arc::new(raster);
        self.opened.insert(0, FocusedRaster::new(path.clone(), Arc::clone(&raster)));
        self.focus.focus(path, Arc::clone(&raster));
        raster
    }

    /// Closes the opened raster at `index`. Closing the focused raster
    /// leaves nothing focused.
    pub fn close(&mut self, index: usize) -> Result<FocusedRaster> {
        if index >= self.opened.len() {
            return Err(self.missing_index(index));
        }
        let closed = self.opened.remove(index);
        self.focus.forget(&closed.raster);
        debug!(index, remaining = self.opened.len(), "Closed raster");
        Ok(closed)
    }

    fn missing_index(&self, index: usize) -> RasterError {
        RasterError::InvalidParameter(format!(
            "no opened raster at index {} ({} open)",
            index,
            self.opened.len()
        ))
    }

    pub fn opened(&self) -> &[FocusedRaster] {
        &self.opened
    }

    /// Focuses the opened raster at `index` (0 is the most recent).
    pub fn focus(&mut self, index: usize) -> Result<()> {
        let entry = self.opened.get(index).ok_or_else(|| self.missing_index(index))?;
        self.focus.focus(entry.path.clone(), Arc::clone(&entry.raster));
        Ok(())
    }

    pub fn focus_state(&self) -> &FocusState {
        &self.focus
    }

    /// Pointer click on the focused raster, advancing the profile selection.
    pub fn click(&mut self, point: Point) -> ProfileSelection {
        self.focus.click(point)
    }

    fn active(&self) -> Result<&FocusedRaster> {
        self.focus.active().ok_or(RasterError::NoActiveRaster)
    }

    /// Runs `operation` on the focused raster; the result is opened and
    /// focused.
    #[instrument(skip(self, operation), fields(operation = %operation))]
    pub fn apply(&mut self, operation: Operation) -> Result<Arc<Raster>> {
        let source = Arc::clone(&self.active()?.raster);
        let result = operation.apply(&source)?;
        info!(
            width = result.width(),
            height = result.height(),
            "Transform complete"
        );
        Ok(self.open(None, result))
    }

    pub fn negate(&mut self) -> Result<Arc<Raster>> {
        self.apply(Operation::Negate)
    }

    /// Threshold with a value typed by the user; an empty field means 2.
    pub fn threshold(&mut self, value: &str, mode: ThresholdMode) -> Result<Arc<Raster>> {
        let value = parse_optional_int_param(value)?.unwrap_or(DEFAULT_THRESHOLD_VALUE);
        self.apply(Operation::Threshold { value, mode })
    }

    pub fn posterize(&mut self, bin_count: &str) -> Result<Arc<Raster>> {
        let bin_count = parse_int_param(bin_count)?;
        self.apply(Operation::Posterize { bin_count })
    }

    /// Histogram stretch. The explicit range is used only when all four
    /// fields are filled in; otherwise the stretch runs in auto mode.
    pub fn stretch(&mut self, p1: &str, p2: &str, q3: &str, q4: &str) -> Result<Arc<Raster>> {
        let fields = [p1, p2, q3, q4];
        let params = if fields.iter().all(|f| !f.trim().is_empty()) {
            Some(StretchParams::new(
                parse_int_param(p1)?,
                parse_int_param(p2)?,
                parse_int_param(q3)?,
                parse_int_param(q4)?,
            ))
        } else {
            None
        };
        self.apply(Operation::Stretch(params))
    }

    pub fn histogram(&self) -> Result<Histogram> {
        Ok(build_histogram(&self.active()?.raster))
    }

    /// Histogram of the focused raster as copyable text.
    pub fn histogram_table(&self) -> Result<String> {
        self.histogram().map(|h| h.to_text_table())
    }

    /// Line profile between the two selected endpoints.
    pub fn profile(&self, source: ProfileSource) -> Result<Vec<f64>> {
        let active = self.active()?;
        let (start, end) = self
            .focus
            .profile_endpoints()
            .ok_or(RasterError::ProfileNotReady)?;
        sample_profile(&active.raster, start, end, self.config.profile_samples, source)
    }

    /// Saves the focused raster as `name` inside the configured output
    /// directory, creating the directory when needed.
    pub fn save(&self, name: &str) -> Result<PathBuf> {
        let dir = &self.config.output_dir;
        std::fs::create_dir_all(dir).map_err(|e| {
            RasterError::OutputWriteError(format!("{}: {}", dir.display(), e))
        })?;

        let path = dir.join(name);
        self.save_as(&path)?;
        Ok(path)
    }

    /// Saves the focused raster to `path`, format inferred from the
    /// extension.
    #[instrument(skip(self, path))]
    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let active = self.active()?;
        let format = OutputFormat::from_path(path)?;

        info!(output = %path.display(), ?format, "Saving image");

        let mut buffer = Vec::new();
        {
            let _span = tracing::info_span!("encode").entered();
            self.writer
                .write_raster(&active.raster, format, &mut buffer, &self.config)?;
        }

        // The file is only touched once encoding has succeeded.
        {
            let _span = tracing::info_span!("write_output_file", size = buffer.len()).entered();
            std::fs::write(path, &buffer).map_err(|e| {
                RasterError::OutputWriteError(format!("{}: {}", path.display(), e))
            })?;
        }

        Ok(())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
