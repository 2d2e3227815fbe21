//! Error types for shape construction.

use std::error::Error;
use std::fmt;

/// Errors arising from [`Shape`](crate::Shape) construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// The extent list was empty — a volume needs at least one axis.
    NoAxes,
    /// An axis had extent zero.
    EmptyAxis {
        /// The offending axis.
        axis: usize,
    },
    /// An axis extent does not fit in an `i32` coordinate.
    AxisTooLarge {
        /// The offending axis.
        axis: usize,
        /// The rejected extent.
        extent: u32,
        /// The largest accepted extent.
        max: u32,
    },
    /// The product of all extents overflows `usize`.
    TooManyCells,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAxes => write!(f, "shape must have at least one axis"),
            Self::EmptyAxis { axis } => write!(f, "axis {axis} has extent 0"),
            Self::AxisTooLarge { axis, extent, max } => {
                write!(f, "axis {axis} extent {extent} exceeds maximum {max}")
            }
            Self::TooManyCells => write!(f, "total cell count overflows usize"),
        }
    }
}

impl Error for ShapeError {}
