//! Axis-aligned regions of interest.

use crate::error::KernelError;
use gyrus_core::{Coord, Shape};
use smallvec::SmallVec;

/// An axis-aligned region of interest: an inclusive `(lo, hi)` bound
/// per axis.
///
/// The region confines a cursor's center position, and neighbor
/// lookups saturate at its bounds — a kernel footprint never escapes
/// the region. Bounds are validated as non-inverted at construction;
/// whether they fit inside a particular shape is checked when the
/// region is applied to one.
///
/// # Examples
///
/// ```
/// use gyrus_kernel::Region;
///
/// let roi = Region::new(&[(2, 7), (0, 4)]).unwrap();
/// assert_eq!(roi.extent(0), 6);
/// assert_eq!(roi.cell_count(), 30);
/// assert!(roi.contains(&[2, 4]));
/// assert!(!roi.contains(&[1, 4]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub(crate) lo: Coord,
    pub(crate) hi: Coord,
}

impl Region {
    /// Create a region from per-axis inclusive `(lo, hi)` bounds.
    ///
    /// Returns `Err(KernelError::EmptyRegion)` if any pair is inverted.
    pub fn new(bounds: &[(i32, i32)]) -> Result<Self, KernelError> {
        for (axis, &(lo, hi)) in bounds.iter().enumerate() {
            if lo > hi {
                return Err(KernelError::EmptyRegion { axis, lo, hi });
            }
        }
        let lo = bounds.iter().map(|&(lo, _)| lo).collect();
        let hi = bounds.iter().map(|&(_, hi)| hi).collect();
        Ok(Self { lo, hi })
    }

    /// The region covering every cell of `shape`.
    pub fn full(shape: &Shape) -> Self {
        let lo: Coord = SmallVec::from_elem(0, shape.ndim());
        let hi = shape.extents().iter().map(|&e| e as i32 - 1).collect();
        Self { lo, hi }
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.lo.len()
    }

    /// Per-axis lower bounds.
    pub fn lo(&self) -> &[i32] {
        &self.lo
    }

    /// Per-axis upper bounds.
    pub fn hi(&self) -> &[i32] {
        &self.hi
    }

    /// The `(lo, hi)` pair for a single axis.
    pub fn bounds(&self, axis: usize) -> (i32, i32) {
        (self.lo[axis], self.hi[axis])
    }

    /// Number of cells the region spans on a single axis.
    pub fn extent(&self, axis: usize) -> u32 {
        (self.hi[axis] - self.lo[axis] + 1) as u32
    }

    /// Total number of cells in the region.
    pub fn cell_count(&self) -> usize {
        (0..self.ndim()).map(|d| self.extent(d) as usize).product()
    }

    /// Whether `coord` has matching arity and lies inside the region.
    pub fn contains(&self, coord: &[i32]) -> bool {
        coord.len() == self.ndim()
            && coord
                .iter()
                .enumerate()
                .all(|(d, &c)| c >= self.lo[d] && c <= self.hi[d])
    }

    /// Check the region against a shape's bounds.
    ///
    /// Returns `Err(KernelError::DimensionMismatch)` on arity mismatch,
    /// or `Err(KernelError::RegionOutOfBounds)` if any axis extends
    /// outside `[0, extent - 1]`.
    pub(crate) fn validate_for(&self, shape: &Shape) -> Result<(), KernelError> {
        if self.ndim() != shape.ndim() {
            return Err(KernelError::DimensionMismatch {
                expected: shape.ndim(),
                got: self.ndim(),
            });
        }
        for axis in 0..self.ndim() {
            let extent = shape.extent(axis);
            if self.lo[axis] < 0 || self.hi[axis] >= extent as i32 {
                return Err(KernelError::RegionOutOfBounds {
                    axis,
                    lo: self.lo[axis],
                    hi: self.hi[axis],
                    extent,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_inverted_bounds() {
        assert!(matches!(
            Region::new(&[(0, 4), (3, 2)]),
            Err(KernelError::EmptyRegion {
                axis: 1,
                lo: 3,
                hi: 2
            })
        ));
    }

    #[test]
    fn full_covers_shape() {
        let shape = Shape::new(&[4, 6]).unwrap();
        let roi = Region::full(&shape);
        assert_eq!(roi.lo(), &[0, 0]);
        assert_eq!(roi.hi(), &[3, 5]);
        assert_eq!(roi.cell_count(), 24);
    }

    #[test]
    fn contains_checks_arity_and_bounds() {
        let roi = Region::new(&[(1, 3), (2, 2)]).unwrap();
        assert!(roi.contains(&[1, 2]));
        assert!(roi.contains(&[3, 2]));
        assert!(!roi.contains(&[0, 2]));
        assert!(!roi.contains(&[1, 3]));
        assert!(!roi.contains(&[1]));
    }

    #[test]
    fn validate_for_accepts_interior_region() {
        let shape = Shape::new(&[10, 10]).unwrap();
        let roi = Region::new(&[(2, 7), (0, 9)]).unwrap();
        assert!(roi.validate_for(&shape).is_ok());
    }

    #[test]
    fn validate_for_rejects_arity_mismatch() {
        let shape = Shape::new(&[10, 10]).unwrap();
        let roi = Region::new(&[(0, 4)]).unwrap();
        assert!(matches!(
            roi.validate_for(&shape),
            Err(KernelError::DimensionMismatch {
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn validate_for_rejects_out_of_bounds() {
        let shape = Shape::new(&[10, 10]).unwrap();
        let negative = Region::new(&[(-1, 4), (0, 9)]).unwrap();
        assert!(matches!(
            negative.validate_for(&shape),
            Err(KernelError::RegionOutOfBounds { axis: 0, .. })
        ));
        let past_end = Region::new(&[(0, 4), (0, 10)]).unwrap();
        assert!(matches!(
            past_end.validate_for(&shape),
            Err(KernelError::RegionOutOfBounds { axis: 1, .. })
        ));
    }
}
