//! Raster transform engine
//!
//! This module holds the in-memory raster model, the lookup-table based point
//! transforms (negation, thresholding, posterization, histogram stretch), the
//! histogram builder and line profiles, plus the session state that decides
//! which raster the transforms operate on.

pub mod common;
pub mod raster;
pub mod histogram;
pub mod lut;
pub mod transforms;
pub mod profile;
pub mod config;
pub mod io;
pub mod session;

pub use common::{
    RasterError,
    Result,
    parse_int_param,
    parse_optional_int_param,
};

pub use raster::{
    ChannelLayout,
    Point,
    Raster,
};

pub use histogram::{
    Histogram,
    HistogramChannel,
    HistogramTable,
    build_histogram,
};

pub use lut::LookupTable;

pub use transforms::{
    Operation,
    StretchParams,
    ThresholdMode,
    negate,
    posterize,
    stretch,
    threshold,
};

pub use profile::{ProfileSource, sample_profile};

pub use config::{EngineConfig, EngineConfigBuilder};

pub use io::{
    ImageFileReader,
    ImageFileWriter,
    OutputFormat,
    RasterReader,
    RasterWriter,
    TiffCompression,
};

pub use session::{
    FocusState,
    FocusedRaster,
    Presenter,
    ProfileSelection,
    Session,
    TextPresenter,
};
