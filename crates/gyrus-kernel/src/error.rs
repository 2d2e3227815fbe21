//! Error types for kernel and cursor construction.

use std::error::Error;
use std::fmt;

/// Errors arising from kernel-range, region, or cursor construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KernelError {
    /// A per-axis offset range does not contain the origin.
    ///
    /// Every axis of a kernel must satisfy `min <= 0 <= max`; a stencil
    /// that excludes its own center has no meaningful cursor position.
    InvalidRange {
        /// The offending axis.
        axis: usize,
        /// The rejected lower offset.
        min: i32,
        /// The rejected upper offset.
        max: i32,
    },
    /// A supplied vector (position, range, or region) has the wrong
    /// number of axes for the shape it is used with.
    DimensionMismatch {
        /// The dimensionality required.
        expected: usize,
        /// The dimensionality supplied.
        got: usize,
    },
    /// A region bound pair is inverted (`lo > hi`).
    EmptyRegion {
        /// The offending axis.
        axis: usize,
        /// The lower bound.
        lo: i32,
        /// The upper bound.
        hi: i32,
    },
    /// A region extends outside the shape it is applied to.
    RegionOutOfBounds {
        /// The offending axis.
        axis: usize,
        /// The region's lower bound on that axis.
        lo: i32,
        /// The region's upper bound on that axis.
        hi: i32,
        /// The shape's extent on that axis.
        extent: u32,
    },
    /// The kernel's offset count (the product of per-axis spans)
    /// overflows `usize`.
    TooManyOffsets,
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { axis, min, max } => {
                write!(
                    f,
                    "kernel range ({min}, {max}) on axis {axis} does not contain the origin"
                )
            }
            Self::DimensionMismatch { expected, got } => {
                write!(f, "expected {expected} axes, got {got}")
            }
            Self::EmptyRegion { axis, lo, hi } => {
                write!(f, "region bounds ({lo}, {hi}) on axis {axis} are inverted")
            }
            Self::RegionOutOfBounds {
                axis,
                lo,
                hi,
                extent,
            } => {
                write!(
                    f,
                    "region ({lo}, {hi}) on axis {axis} exceeds extent {extent}"
                )
            }
            Self::TooManyOffsets => write!(f, "kernel offset count overflows usize"),
        }
    }
}

impl Error for KernelError {}
