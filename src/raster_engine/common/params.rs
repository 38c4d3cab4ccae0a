//! Parsing of free-text parameters typed by the user.
//!
//! Every numeric transform parameter that arrives from an input field goes
//! through here before it reaches a transform.

use crate::raster_engine::common::error::{RasterError, Result};
use crate::raster_engine::raster::Point;

/// Parses an integer parameter, ignoring surrounding whitespace.
pub fn parse_int_param(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|e| RasterError::ParseError {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

/// Like [`parse_int_param`], but an empty (or blank) field yields `None`.
pub fn parse_optional_int_param(input: &str) -> Result<Option<i64>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_int_param(input).map(Some)
}

/// Parses an `x,y` pair of non-negative integers.
pub fn parse_point_param(input: &str) -> Result<Point> {
    let (x, y) = input.split_once(',').ok_or_else(|| RasterError::ParseError {
        input: input.to_string(),
        reason: "expected x,y".to_string(),
    })?;

    let coordinate = |raw: &str| -> Result<usize> {
        let value = parse_int_param(raw)?;
        usize::try_from(value).map_err(|_| RasterError::ParseError {
            input: input.to_string(),
            reason: format!("coordinate {} is negative", value),
        })
    };

    Ok(Point::new(coordinate(x)?, coordinate(y)?))
}
