//! In-memory raster model
//!
//! Decoded images are held as a dimensioned, channel-interleaved sample buffer.

pub mod types;

pub use types::{ChannelLayout, Point, Raster};
