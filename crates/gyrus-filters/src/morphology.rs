//! Morphological erosion and dilation.
//!
//! Operates on a scalar volume binarized by a threshold: values above
//! the threshold are "present" (1), at or below are "absent" (0).
//!
//! - **Dilate**: output is 1.0 if *any* footprint cell is present.
//! - **Erode**: output is 1.0 only if *all* footprint cells are present.
//!
//! Useful for expanding masks, shrinking them, and smoothing binary
//! segmentations. Replicate-edge semantics apply: at volume borders the
//! footprint saturates, so border cells weigh their own value where the
//! kernel would reach outside.

use gyrus_kernel::{KernelError, KernelIterator, KernelRange, Region};
use gyrus_volume::Volume;

/// Morphological operation type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorphOp {
    /// Output is 1.0 if any cell in the footprint is present.
    Dilate,
    /// Output is 1.0 only if all cells in the footprint are present.
    Erode,
}

/// Apply a morphological operation over the `(2r+1)^k` box footprint.
///
/// Reads `src`, binarizes each sample with `threshold` (strictly above
/// is "present"), and writes a binary volume of 0.0 / 1.0 values.
pub fn morphology(
    src: &Volume<f32>,
    radii: &[u32],
    threshold: f32,
    op: MorphOp,
) -> Result<Volume<f32>, KernelError> {
    let kernel = KernelRange::symmetric(radii)?;
    let mut cursor = KernelIterator::new(src.shape().clone(), &kernel)?;
    let mut out = Volume::filled(src.shape().clone(), 0.0f32);
    run_morph(&mut cursor, src, &mut out, threshold, op);
    Ok(out)
}

fn run_morph(
    cursor: &mut KernelIterator,
    src: &Volume<f32>,
    out: &mut Volume<f32>,
    threshold: f32,
    op: MorphOp,
) {
    while !cursor.is_end() {
        let present = match op {
            MorphOp::Dilate => cursor.addresses().iter().any(|&a| src[a] > threshold),
            MorphOp::Erode => cursor.addresses().iter().all(|&a| src[a] > threshold),
        };
        out[cursor.center_address()] = if present { 1.0 } else { 0.0 };
        cursor.advance();
    }
}

/// [`morphology`] restricted to `region`; cells outside it are copied
/// from the source unchanged (not binarized). Footprints saturate at
/// the region bounds.
pub fn morphology_region(
    src: &Volume<f32>,
    radii: &[u32],
    threshold: f32,
    op: MorphOp,
    region: Region,
) -> Result<Volume<f32>, KernelError> {
    let kernel = KernelRange::symmetric(radii)?;
    let mut cursor = KernelIterator::with_region(src.shape().clone(), &kernel, region)?;
    let mut out = src.clone();
    run_morph(&mut cursor, src, &mut out, threshold, op);
    Ok(out)
}

/// [`morphology`] with [`MorphOp::Dilate`].
pub fn dilate(src: &Volume<f32>, radii: &[u32], threshold: f32) -> Result<Volume<f32>, KernelError> {
    morphology(src, radii, threshold, MorphOp::Dilate)
}

/// [`morphology`] with [`MorphOp::Erode`].
pub fn erode(src: &Volume<f32>, radii: &[u32], threshold: f32) -> Result<Volume<f32>, KernelError> {
    morphology(src, radii, threshold, MorphOp::Erode)
}
