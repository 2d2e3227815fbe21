//! End-to-end oracle tests: the cursor's footprint addresses must match
//! explicit nested-loop computations with per-axis saturation, cell for
//! cell, over full 4D volumes.

use gyrus_core::Shape;
use gyrus_kernel::{KernelIterator, KernelRange, Region};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Flat address of a saturated 4D coordinate, written out longhand.
fn brute_address(shape: &Shape, lo: &[i32; 4], hi: &[i32; 4], p: &[i32; 4]) -> usize {
    let mut address = 0usize;
    for d in 0..4 {
        let c = p[d].clamp(lo[d], hi[d]);
        address += c as usize * shape.stride(d);
    }
    address
}

#[test]
fn symmetric_box_kernel_matches_brute_force_4d() {
    let shape = Shape::new(&[10, 20, 30, 10]).unwrap();
    // Radius (1,1,1) over axes 0..2; axis 3 carries no offsets.
    let kernel = KernelRange::symmetric(&[1, 1, 1]).unwrap();
    let mut it = KernelIterator::new(shape.clone(), &kernel).unwrap();
    assert_eq!(it.offset_count(), 27);

    let lo = [0i32; 4];
    let hi = [9i32, 19, 29, 9];
    let mut cells = 0usize;
    while !it.is_end() {
        let c = it.center_position();
        let center = [c[0], c[1], c[2], c[3]];
        let mut k = 0usize;
        for d0 in -1i32..=1 {
            for d1 in -1i32..=1 {
                for d2 in -1i32..=1 {
                    let p = [center[0] + d0, center[1] + d1, center[2] + d2, center[3]];
                    let expected = brute_address(&shape, &lo, &hi, &p);
                    assert_eq!(
                        it.neighbor_address(k),
                        expected,
                        "offset {k} at center {center:?}"
                    );
                    k += 1;
                }
            }
        }
        assert_eq!(k, 27);
        cells += 1;
        it.advance();
    }
    assert_eq!(cells, 10 * 20 * 30 * 10);
}

#[test]
fn asymmetric_kernel_matches_brute_force_forward() {
    let shape = Shape::new(&[10, 20, 30, 10]).unwrap();
    let kernel = KernelRange::new(&[(-2, 1), (-1, 0), (0, 2), (0, 2)]).unwrap();
    let mut it = KernelIterator::new(shape.clone(), &kernel).unwrap();
    assert_eq!(it.offset_count(), 4 * 2 * 3 * 3);

    let lo = [0i32; 4];
    let hi = [9i32, 19, 29, 9];
    let mut cells = 0usize;
    while !it.is_end() {
        let c = it.center_position();
        let center = [c[0], c[1], c[2], c[3]];
        assert_footprint(&shape, &lo, &hi, &center, &it);
        cells += 1;
        it.advance();
    }
    assert_eq!(cells, 10 * 20 * 30 * 10);
}

#[test]
fn asymmetric_kernel_matches_brute_force_backward() {
    let shape = Shape::new(&[10, 20, 30, 10]).unwrap();
    let kernel = KernelRange::new(&[(-2, 1), (-1, 0), (0, 2), (0, 2)]).unwrap();
    let mut it = KernelIterator::new(shape.clone(), &kernel).unwrap();

    let lo = [0i32; 4];
    let hi = [9i32, 19, 29, 9];
    it.go_end();
    it.retreat();
    let mut cells = 0usize;
    loop {
        let c = it.center_position();
        let center = [c[0], c[1], c[2], c[3]];
        assert_footprint(&shape, &lo, &hi, &center, &it);
        cells += 1;
        if it.is_begin() {
            break;
        }
        it.retreat();
    }
    assert_eq!(cells, 10 * 20 * 30 * 10);
}

/// Check all 72 offsets of the `(-2,1) x (-1,0) x (0,2) x (0,2)` kernel
/// in the cursor's enumeration order (last axis fastest).
fn assert_footprint(
    shape: &Shape,
    lo: &[i32; 4],
    hi: &[i32; 4],
    center: &[i32; 4],
    it: &KernelIterator,
) {
    let mut k = 0usize;
    for d0 in -2i32..=1 {
        for d1 in -1i32..=0 {
            for d2 in 0i32..=2 {
                for d3 in 0i32..=2 {
                    let p = [center[0] + d0, center[1] + d1, center[2] + d2, center[3] + d3];
                    let expected = brute_address(shape, lo, hi, &p);
                    assert_eq!(
                        it.neighbor_address(k),
                        expected,
                        "offset {k} at center {center:?}"
                    );
                    k += 1;
                }
            }
        }
    }
    assert_eq!(k, 72);
}

#[test]
fn region_confined_traversal_matches_brute_force() {
    let shape = Shape::new(&[10, 20, 30, 10]).unwrap();
    let kernel = KernelRange::symmetric(&[1, 1, 1, 1]).unwrap();
    let region = Region::new(&[(2, 7), (3, 15), (0, 29), (5, 5)]).unwrap();
    let mut it = KernelIterator::with_region(shape.clone(), &kernel, region).unwrap();

    let lo = [2i32, 3, 0, 5];
    let hi = [7i32, 15, 29, 5];
    let mut cells = 0usize;
    while !it.is_end() {
        let c = it.center_position();
        let center = [c[0], c[1], c[2], c[3]];
        let mut k = 0usize;
        for d0 in -1i32..=1 {
            for d1 in -1i32..=1 {
                for d2 in -1i32..=1 {
                    for d3 in -1i32..=1 {
                        let p = [
                            center[0] + d0,
                            center[1] + d1,
                            center[2] + d2,
                            center[3] + d3,
                        ];
                        let expected = brute_address(&shape, &lo, &hi, &p);
                        assert_eq!(it.neighbor_address(k), expected);
                        k += 1;
                    }
                }
            }
        }
        assert_eq!(k, 81);
        cells += 1;
        it.advance();
    }
    // 6 * 13 * 30 * 1 region cells, each visited exactly once.
    assert_eq!(cells, 2340);
}

#[test]
fn direct_jump_matches_sequential_walk() {
    let shape = Shape::new(&[6, 7, 8]).unwrap();
    let kernel = KernelRange::new(&[(-2, 1), (-1, 1), (0, 2)]).unwrap();
    let mut walker = KernelIterator::new(shape.clone(), &kernel).unwrap();
    let mut jumper = KernelIterator::new(shape, &kernel).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(0x6779_7275);
    for _ in 0..200 {
        let target = [
            rng.random_range(0..6),
            rng.random_range(0..7),
            rng.random_range(0..8),
        ];
        assert_eq!(jumper.go_to(&target), Ok(false));

        walker.go_begin();
        while walker.center_position() != target.as_slice() {
            walker.advance();
        }
        assert_eq!(walker.addresses(), jumper.addresses());
        assert_eq!(walker.center_address(), jumper.center_address());
    }
}
