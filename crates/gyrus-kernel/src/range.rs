//! Per-axis kernel offset ranges.

use crate::error::KernelError;
use smallvec::SmallVec;

/// The per-axis offset extents of a kernel (stencil).
///
/// Each axis carries an inclusive offset range `(min, max)` with
/// `min <= 0 <= max` — the stencil always contains its own center.
/// Ranges may be asymmetric (`(-2, 1)` reads two cells behind and one
/// ahead on that axis).
///
/// A range may have fewer axes than the volume it is applied to; the
/// cursor pads the trailing axes with `(0, 0)` so those axes carry no
/// neighbors.
///
/// # Examples
///
/// ```
/// use gyrus_kernel::KernelRange;
///
/// // A 3x3x3 box kernel.
/// let cube = KernelRange::symmetric(&[1, 1, 1]).unwrap();
/// assert_eq!(cube.offset_count(), Some(27));
///
/// // Asymmetric: two behind / one ahead on axis 0, causal on axis 1.
/// let skew = KernelRange::new(&[(-2, 1), (-1, 0)]).unwrap();
/// assert_eq!(skew.offset_count(), Some(8));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KernelRange {
    ranges: SmallVec<[(i32, i32); 4]>,
}

impl KernelRange {
    /// Create a kernel range from per-axis `(min, max)` pairs.
    ///
    /// Returns `Err(KernelError::InvalidRange)` if any pair does not
    /// satisfy `min <= 0 <= max`.
    pub fn new(ranges: &[(i32, i32)]) -> Result<Self, KernelError> {
        for (axis, &(min, max)) in ranges.iter().enumerate() {
            if min > 0 || max < 0 {
                return Err(KernelError::InvalidRange { axis, min, max });
            }
        }
        Ok(Self {
            ranges: SmallVec::from_slice(ranges),
        })
    }

    /// Create a symmetric kernel range: radius `r` expands to `(-r, +r)`.
    ///
    /// Returns `Err(KernelError::InvalidRange)` if a radius does not fit
    /// an `i32` offset.
    pub fn symmetric(radii: &[u32]) -> Result<Self, KernelError> {
        let mut ranges: SmallVec<[(i32, i32); 4]> = SmallVec::with_capacity(radii.len());
        for (axis, &r) in radii.iter().enumerate() {
            if r > i32::MAX as u32 {
                return Err(KernelError::InvalidRange {
                    axis,
                    min: i32::MIN,
                    max: i32::MAX,
                });
            }
            ranges.push((-(r as i32), r as i32));
        }
        Ok(Self { ranges })
    }

    /// Number of axes this range describes.
    pub fn ndim(&self) -> usize {
        self.ranges.len()
    }

    /// All per-axis `(min, max)` pairs.
    pub fn ranges(&self) -> &[(i32, i32)] {
        &self.ranges
    }

    /// The `(min, max)` pair for a single axis.
    pub fn range(&self, axis: usize) -> (i32, i32) {
        self.ranges[axis]
    }

    /// Total number of offsets (the product of per-axis spans), or
    /// `None` if the product overflows `usize`.
    pub fn offset_count(&self) -> Option<usize> {
        self.ranges.iter().try_fold(1usize, |acc, &(min, max)| {
            acc.checked_mul((max as i64 - min as i64 + 1) as usize)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_straddling_ranges() {
        let range = KernelRange::new(&[(-2, 1), (-1, 0), (0, 2)]).unwrap();
        assert_eq!(range.ndim(), 3);
        assert_eq!(range.range(0), (-2, 1));
        assert_eq!(range.offset_count(), Some(4 * 2 * 3));
    }

    #[test]
    fn new_rejects_positive_min() {
        assert!(matches!(
            KernelRange::new(&[(0, 1), (1, 2)]),
            Err(KernelError::InvalidRange {
                axis: 1,
                min: 1,
                max: 2
            })
        ));
    }

    #[test]
    fn new_rejects_negative_max() {
        assert!(matches!(
            KernelRange::new(&[(-1, -1)]),
            Err(KernelError::InvalidRange { axis: 0, .. })
        ));
    }

    #[test]
    fn new_accepts_empty_axis_list() {
        // A zero-axis range is valid on its own; arity is checked when
        // the range is applied to a shape.
        let range = KernelRange::new(&[]).unwrap();
        assert_eq!(range.ndim(), 0);
        assert_eq!(range.offset_count(), Some(1));
    }

    #[test]
    fn symmetric_expands_radii() {
        let range = KernelRange::symmetric(&[1, 0, 2]).unwrap();
        assert_eq!(range.ranges(), &[(-1, 1), (0, 0), (-2, 2)]);
        assert_eq!(range.offset_count(), Some(3 * 1 * 5));
    }

    #[test]
    fn symmetric_rejects_oversized_radius() {
        assert!(matches!(
            KernelRange::symmetric(&[i32::MAX as u32 + 1]),
            Err(KernelError::InvalidRange { axis: 0, .. })
        ));
    }

    #[test]
    fn offset_count_overflow_is_none() {
        let half = (-i32::MAX, i32::MAX);
        let range = KernelRange::new(&[half, half, half]).unwrap();
        assert_eq!(range.offset_count(), None);
    }
}
