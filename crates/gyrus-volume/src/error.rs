//! Error types for volume construction.

use std::error::Error;
use std::fmt;

/// Errors arising from [`Volume`](crate::Volume) construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VolumeError {
    /// The supplied buffer does not match the shape's cell count.
    LengthMismatch {
        /// Cell count required by the shape.
        expected: usize,
        /// Length of the supplied buffer.
        got: usize,
    },
}

impl fmt::Display for VolumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, got } => {
                write!(f, "buffer length {got} does not match shape cell count {expected}")
            }
        }
    }
}

impl Error for VolumeError {}
