//! Common utilities module
//!
//! Error types and the parse boundary for user-supplied text parameters.

pub mod error;
pub mod params;

pub use error::{RasterError, Result};
pub use params::{parse_int_param, parse_optional_int_param, parse_point_param};
