//! Error types for grid construction and access.

use std::error::Error;
use std::fmt;

/// Errors from grid construction and checked cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A dimension is zero; grids must have at least one cell per axis.
    ZeroDimension {
        /// Axis name: `"x"`, `"y"`, or `"z"`.
        axis: &'static str,
    },
    /// A dimension exceeds the coordinate range (`i32::MAX`).
    DimensionTooLarge {
        /// Axis name: `"x"`, `"y"`, or `"z"`.
        axis: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// The dimension product does not fit in `usize`.
    TooManyCells,
    /// A cell buffer's length does not equal the dimension product.
    CellCountMismatch {
        /// Expected cell count (`sx * sy * sz`).
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
    /// A coordinate lies outside `[0, dim)` on some axis.
    OutOfBounds {
        /// The offending coordinate.
        coord: (i32, i32, i32),
        /// Human-readable bounds description.
        bounds: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { axis } => write!(f, "grid dimension {axis} is zero"),
            Self::DimensionTooLarge { axis, value } => {
                write!(f, "grid dimension {axis} = {value} exceeds i32::MAX")
            }
            Self::TooManyCells => write!(f, "grid cell count overflows usize"),
            Self::CellCountMismatch { expected, actual } => {
                write!(
                    f,
                    "cell buffer length {actual} does not match dimension product {expected}"
                )
            }
            Self::OutOfBounds { coord, bounds } => {
                write!(
                    f,
                    "coordinate ({}, {}, {}) outside {bounds}",
                    coord.0, coord.1, coord.2
                )
            }
        }
    }
}

impl Error for GridError {}
