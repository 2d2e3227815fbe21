//! Validated N-dimensional extents with row-major addressing.

use crate::coord::Coord;
use crate::error::ShapeError;
use smallvec::SmallVec;

/// The extents of an N-dimensional volume, with precomputed row-major
/// strides and total length.
///
/// Strides follow the row-major convention: the last axis is contiguous
/// (`stride[D-1] == 1`) and `stride[d] == stride[d+1] * extent[d+1]`.
/// The flat address of a coordinate is the stride-weighted sum of its
/// components.
///
/// Extents are validated once at construction; every `Shape` in
/// existence has at least one axis, no zero extents, per-axis extents
/// that fit an `i32` coordinate, and a total length that fits `usize`.
///
/// # Examples
///
/// ```
/// use gyrus_core::Shape;
///
/// let shape = Shape::new(&[4, 5, 6]).unwrap();
/// assert_eq!(shape.ndim(), 3);
/// assert_eq!(shape.len(), 120);
/// assert_eq!(shape.strides(), &[30, 6, 1]);
/// assert_eq!(shape.linear(&[1, 2, 3]), Some(45));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    extents: SmallVec<[u32; 4]>,
    strides: SmallVec<[usize; 4]>,
    len: usize,
}

impl Shape {
    /// Maximum per-axis extent: coordinates use `i32`, so each axis must fit.
    pub const MAX_EXTENT: u32 = i32::MAX as u32;

    /// Create a shape from per-axis extents.
    ///
    /// Returns `Err(ShapeError::NoAxes)` for an empty list,
    /// `Err(ShapeError::EmptyAxis)` if any extent is 0,
    /// `Err(ShapeError::AxisTooLarge)` if any extent exceeds `i32::MAX`,
    /// or `Err(ShapeError::TooManyCells)` if the total length overflows.
    pub fn new(extents: &[u32]) -> Result<Self, ShapeError> {
        if extents.is_empty() {
            return Err(ShapeError::NoAxes);
        }
        for (axis, &extent) in extents.iter().enumerate() {
            if extent == 0 {
                return Err(ShapeError::EmptyAxis { axis });
            }
            if extent > Self::MAX_EXTENT {
                return Err(ShapeError::AxisTooLarge {
                    axis,
                    extent,
                    max: Self::MAX_EXTENT,
                });
            }
        }

        let ndim = extents.len();
        let mut strides: SmallVec<[usize; 4]> = SmallVec::from_elem(1, ndim);
        let mut len = extents[ndim - 1] as usize;
        for d in (0..ndim - 1).rev() {
            strides[d] = strides[d + 1]
                .checked_mul(extents[d + 1] as usize)
                .ok_or(ShapeError::TooManyCells)?;
            len = len
                .checked_mul(extents[d] as usize)
                .ok_or(ShapeError::TooManyCells)?;
        }

        Ok(Self {
            extents: SmallVec::from_slice(extents),
            strides,
            len,
        })
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.extents.len()
    }

    /// Extent of a single axis.
    pub fn extent(&self, axis: usize) -> u32 {
        self.extents[axis]
    }

    /// All per-axis extents.
    pub fn extents(&self) -> &[u32] {
        &self.extents
    }

    /// Row-major stride of a single axis.
    pub fn stride(&self, axis: usize) -> usize {
        self.strides[axis]
    }

    /// All per-axis strides.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Total number of cells (the product of all extents).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always returns `false` — construction rejects zero-cell shapes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `coord` has matching arity and every component in bounds.
    pub fn contains(&self, coord: &[i32]) -> bool {
        coord.len() == self.ndim()
            && coord
                .iter()
                .zip(&self.extents)
                .all(|(&c, &extent)| c >= 0 && c < extent as i32)
    }

    /// Flat row-major address of an in-bounds coordinate.
    ///
    /// Returns `None` when `coord` has the wrong arity or any component
    /// is out of bounds.
    pub fn linear(&self, coord: &[i32]) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        Some(
            coord
                .iter()
                .zip(&self.strides)
                .map(|(&c, &stride)| c as usize * stride)
                .sum(),
        )
    }

    /// Coordinate of a flat address (row-major inverse of [`linear`](Self::linear)).
    ///
    /// Returns `None` when `index >= len()`.
    pub fn coord_of(&self, index: usize) -> Option<Coord> {
        if index >= self.len {
            return None;
        }
        let mut remainder = index;
        let mut coord: Coord = SmallVec::with_capacity(self.ndim());
        for &stride in &self.strides {
            coord.push((remainder / stride) as i32);
            remainder %= stride;
        }
        Some(coord)
    }
}
