use std::fmt;

use crate::raster_engine::common::error::Result;
use crate::raster_engine::raster::Raster;
use crate::raster_engine::transforms::{
    StretchParams, ThresholdMode, negate, posterize, stretch, threshold,
};

/// A point transform together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Negate,
    Threshold { value: i64, mode: ThresholdMode },
    Posterize { bin_count: i64 },
    Stretch(Option<StretchParams>),
}

impl Operation {
    pub fn apply(&self, raster: &Raster) -> Result<Raster> {
        match *self {
            Operation::Negate => Ok(negate(raster)),
            Operation::Threshold { value, mode } => threshold(raster, value, mode),
            Operation::Posterize { bin_count } => posterize(raster, bin_count),
            Operation::Stretch(params) => stretch(raster, params),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Negate => "negate",
            Operation::Threshold { .. } => "threshold",
            Operation::Posterize { .. } => "posterize",
            Operation::Stretch(_) => "stretch",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Negate => write!(f, "negate"),
            Operation::Threshold { value, mode } => write!(f, "threshold({:?}, {})", mode, value),
            Operation::Posterize { bin_count } => write!(f, "posterize({})", bin_count),
            Operation::Stretch(Some(p)) => {
                write!(f, "stretch({}..{} -> {}..{})", p.start, p.end, p.low, p.high)
            }
            Operation::Stretch(None) => write!(f, "stretch(auto)"),
        }
    }
}
