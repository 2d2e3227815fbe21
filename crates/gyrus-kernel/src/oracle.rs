//! Brute-force oracles for cursor tests.
//!
//! These helpers verify a [`KernelIterator`] against the closed-form
//! definition of its state: every footprint coordinate is the per-axis
//! region saturation of `center + offset`, and a full traversal visits
//! every region cell exactly once. Reused across the unit-test modules.

use crate::iter::KernelIterator;
use crate::region::Region;
use gyrus_core::{clamp, Shape};
use indexmap::IndexSet;

/// Closed-form flat address of `clamp(center + offset)` saturated into
/// the region.
pub(crate) fn clamped_neighbor_address(
    shape: &Shape,
    region: &Region,
    center: &[i32],
    offset: &[i32],
) -> usize {
    let mut address = 0usize;
    for d in 0..shape.ndim() {
        let c = clamp(center[d] + offset[d], region.lo()[d], region.hi()[d]);
        address += c as usize * shape.stride(d);
    }
    address
}

/// Assert that every footprint entry matches the closed form at the
/// cursor's current center.
pub(crate) fn assert_footprint_matches(it: &KernelIterator) {
    let center: Vec<i32> = it.center_position().to_vec();
    for k in 0..it.offset_count() {
        let (address, position) = it.neighbor(k);
        let offset = it.offset(k);
        let expected = clamped_neighbor_address(it.shape(), it.region(), &center, offset);
        assert_eq!(
            address, expected,
            "neighbor {k} (offset {offset:?}) address mismatch at center {center:?}"
        );
        for d in 0..it.ndim() {
            let expected = clamp(
                center[d] + offset[d],
                it.region().lo()[d],
                it.region().hi()[d],
            );
            assert_eq!(
                position[d], expected,
                "neighbor {k} coordinate mismatch on axis {d} at center {center:?}"
            );
        }
    }
}

/// Walk the full region forward, checking the footprint at every cell
/// and that exactly `region.cell_count()` distinct centers are visited.
pub(crate) fn assert_forward_traversal_exact(it: &mut KernelIterator) {
    it.go_begin();
    let mut seen: IndexSet<usize> = IndexSet::new();
    while !it.is_end() {
        assert_footprint_matches(it);
        assert!(
            seen.insert(it.center_address()),
            "center {} visited twice",
            it.center_address()
        );
        it.advance();
    }
    assert_eq!(seen.len(), it.region().cell_count());
}

/// Walk the full region backward, mirroring
/// [`assert_forward_traversal_exact`].
pub(crate) fn assert_backward_traversal_exact(it: &mut KernelIterator) {
    it.go_end();
    it.retreat();
    let mut seen: IndexSet<usize> = IndexSet::new();
    loop {
        assert_footprint_matches(it);
        assert!(
            seen.insert(it.center_address()),
            "center {} visited twice",
            it.center_address()
        );
        if it.is_begin() {
            break;
        }
        it.retreat();
    }
    assert_eq!(seen.len(), it.region().cell_count());
}
