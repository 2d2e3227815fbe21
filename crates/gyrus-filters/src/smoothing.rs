//! Local (box) mean smoothing.

use gyrus_kernel::{KernelError, KernelIterator, KernelRange, Region};
use gyrus_volume::Volume;

/// Replace every cell with the mean of its `(2r+1)^k` box neighborhood.
///
/// Edge cells use replicate-edge semantics: saturated footprint entries
/// re-read the border cell, so the divisor is always the full offset
/// count. Radii may name fewer axes than the volume; trailing axes are
/// untouched.
///
/// # Examples
///
/// ```
/// use gyrus_core::Shape;
/// use gyrus_volume::Volume;
/// use gyrus_filters::box_mean;
///
/// let shape = Shape::new(&[4]).unwrap();
/// let vol = Volume::from_vec(shape, vec![3.0f32, 6.0, 9.0, 12.0]).unwrap();
/// let smoothed = box_mean(&vol, &[1]).unwrap();
/// assert_eq!(smoothed.as_slice(), &[4.0, 6.0, 9.0, 11.0]);
/// ```
pub fn box_mean(src: &Volume<f32>, radii: &[u32]) -> Result<Volume<f32>, KernelError> {
    let kernel = KernelRange::symmetric(radii)?;
    let mut cursor = KernelIterator::new(src.shape().clone(), &kernel)?;
    let mut out = Volume::filled(src.shape().clone(), 0.0f32);
    run_mean(&mut cursor, src, &mut out);
    Ok(out)
}

/// [`box_mean`] restricted to `region`; cells outside it are copied
/// from the source unchanged. Footprints saturate at the region bounds,
/// not the volume bounds.
pub fn box_mean_region(
    src: &Volume<f32>,
    radii: &[u32],
    region: Region,
) -> Result<Volume<f32>, KernelError> {
    let kernel = KernelRange::symmetric(radii)?;
    let mut cursor = KernelIterator::with_region(src.shape().clone(), &kernel, region)?;
    let mut out = src.clone();
    run_mean(&mut cursor, src, &mut out);
    Ok(out)
}

fn run_mean(cursor: &mut KernelIterator, src: &Volume<f32>, out: &mut Volume<f32>) {
    let norm = 1.0 / cursor.offset_count() as f32;
    while !cursor.is_end() {
        let sum: f32 = cursor.addresses().iter().map(|&a| src[a]).sum();
        out[cursor.center_address()] = sum * norm;
        cursor.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyrus_core::Shape;
    use proptest::prelude::*;

    fn volume(extents: &[u32], data: Vec<f32>) -> Volume<f32> {
        Volume::from_vec(Shape::new(extents).unwrap(), data).unwrap()
    }

    #[test]
    fn radius_zero_is_identity() {
        let vol = volume(&[2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let out = box_mean(&vol, &[0, 0]).unwrap();
        assert_eq!(out, vol);
    }

    #[test]
    fn mean_1d_replicates_edges() {
        let vol = volume(&[4], vec![3.0, 6.0, 9.0, 12.0]);
        let out = box_mean(&vol, &[1]).unwrap();
        // Ends re-read the border sample: (3+3+6)/3 and (9+12+12)/3.
        assert_eq!(out.as_slice(), &[4.0, 6.0, 9.0, 11.0]);
    }

    #[test]
    fn mean_2d_interior_cell() {
        #[rustfmt::skip]
        let vol = volume(&[3, 3], vec![
            1.0, 2.0, 3.0,
            4.0, 5.0, 6.0,
            7.0, 8.0, 9.0,
        ]);
        let out = box_mean(&vol, &[1, 1]).unwrap();
        assert_eq!(out.get(&[1, 1]), Some(&5.0));
        // Corner: clamped footprint reads [1,1,2,1,1,2,4,4,5].
        assert!((out.get(&[0, 0]).unwrap() - 21.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn constant_volume_is_fixed_point() {
        let vol = Volume::filled(Shape::new(&[4, 5, 3]).unwrap(), 2.5f32);
        let out = box_mean(&vol, &[1, 1, 1]).unwrap();
        assert_eq!(out, vol);
    }

    #[test]
    fn short_radii_leave_trailing_axes_untouched() {
        // Radius on axis 0 only: each column smooths independently.
        let vol = volume(&[3, 2], vec![0.0, 10.0, 3.0, 20.0, 6.0, 30.0]);
        let out = box_mean(&vol, &[1]).unwrap();
        assert_eq!(out.get(&[1, 0]), Some(&3.0)); // (0+3+6)/3
        assert_eq!(out.get(&[1, 1]), Some(&20.0)); // (10+20+30)/3
    }

    #[test]
    fn region_variant_copies_outside_cells() {
        let vol = volume(&[4], vec![0.0, 8.0, 16.0, 24.0]);
        let region = gyrus_kernel::Region::new(&[(1, 2)]).unwrap();
        let out = box_mean_region(&vol, &[1], region).unwrap();
        // Outside the region: untouched.
        assert_eq!(out.as_slice()[0], 0.0);
        assert_eq!(out.as_slice()[3], 24.0);
        // Inside: footprint saturates at the region bounds (cells 1..=2).
        assert!((out.as_slice()[1] - (8.0 + 8.0 + 16.0) / 3.0).abs() < 1e-5);
        assert!((out.as_slice()[2] - (8.0 + 16.0 + 16.0) / 3.0).abs() < 1e-5);
    }

    #[test]
    fn rejects_radii_with_more_axes_than_volume() {
        let vol = volume(&[4], vec![0.0; 4]);
        assert!(matches!(
            box_mean(&vol, &[1, 1]),
            Err(KernelError::DimensionMismatch { .. })
        ));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn mean_stays_within_source_bounds(
            values in prop::collection::vec(0.0f32..100.0, 12),
        ) {
            let vol = volume(&[3, 4], values);
            let out = box_mean(&vol, &[1, 1]).unwrap();
            let lo = vol.as_slice().iter().cloned().fold(f32::INFINITY, f32::min);
            let hi = vol.as_slice().iter().cloned().fold(f32::NEG_INFINITY, f32::max);
            for &v in out.as_slice() {
                prop_assert!(v >= lo - 1e-4 && v <= hi + 1e-4);
            }
        }
    }
}
