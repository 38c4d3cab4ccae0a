//! Point transforms
//!
//! Each transform takes an immutable raster and returns a new one of the same
//! shape. Alpha samples are always carried over unchanged.

mod negate;
mod threshold;
mod posterize;
mod stretch;
mod operation;

#[cfg(test)]
mod tests;

pub use negate::negate;
pub use threshold::{ThresholdMode, threshold};
pub use posterize::posterize;
pub use stretch::{StretchParams, stretch};
pub use operation::Operation;
