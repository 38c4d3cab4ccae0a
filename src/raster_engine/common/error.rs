use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Failed to parse parameter {input:?}: {reason}")]
    ParseError { input: String, reason: String },

    #[error("{operation} does not support channel layout {layout}")]
    UnsupportedChannelLayout { operation: &'static str, layout: String },

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Point ({x}, {y}) lies outside the {width}x{height} raster")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Sample buffer holds {actual} samples, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("No raster is focused")]
    NoActiveRaster,

    #[error("Line profile needs both endpoints to be selected")]
    ProfileNotReady,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RasterError {
    pub(crate) fn unsupported(operation: &'static str, layout: impl ToString) -> Self {
        RasterError::UnsupportedChannelLayout {
            operation,
            layout: layout.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RasterError>;
