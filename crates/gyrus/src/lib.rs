//! Gyrus: ND volume storage and edge-clamped kernel iteration for
//! scientific imaging.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Gyrus sub-crates. For most users, adding `gyrus` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gyrus::{KernelIterator, KernelRange, Shape, Volume};
//!
//! // A 3D volume with a linear ramp along the last axis.
//! let shape = Shape::new(&[4, 5, 6]).unwrap();
//! let data: Vec<f32> = (0..shape.len()).map(|i| (i % 6) as f32).collect();
//! let vol = Volume::from_vec(shape.clone(), data).unwrap();
//!
//! // Walk every cell with a 3x3x3 stencil and find the local maximum.
//! let kernel = KernelRange::symmetric(&[1, 1, 1]).unwrap();
//! let mut it = KernelIterator::new(shape, &kernel).unwrap();
//! let mut peaks = Volume::filled(vol.shape().clone(), 0.0f32);
//! while !it.is_end() {
//!     let max = it
//!         .addresses()
//!         .iter()
//!         .map(|&a| vol[a])
//!         .fold(f32::NEG_INFINITY, f32::max);
//!     peaks[it.center_address()] = max;
//!     it.advance();
//! }
//! assert_eq!(peaks[0], 1.0); // corner: ramp neighbors 0 and 1
//!
//! // Or use a shipped filter directly.
//! let smoothed = gyrus::filters::box_mean(&vol, &[1, 1, 1]).unwrap();
//! assert_eq!(smoothed.shape(), vol.shape());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not
//! re-exported at the root:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gyrus-core` | `Coord`, `Shape`, `clamp`, shape errors |
//! | [`volume`] | `gyrus-volume` | Flat owning ND storage |
//! | [`kernel`] | `gyrus-kernel` | Kernel cursor, offset ranges, regions |
//! | [`filters`] | `gyrus-filters` | Box smoothing, morphology |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: coordinates, shapes, and the shared clamp (`gyrus-core`).
pub use gyrus_core as types;

/// Flat ND volume storage (`gyrus-volume`).
pub use gyrus_volume as volume;

/// Kernel cursor, offset ranges, and regions (`gyrus-kernel`).
pub use gyrus_kernel as kernel;

/// Stencil filters over volumes (`gyrus-filters`).
pub use gyrus_filters as filters;

pub use gyrus_core::{clamp, Coord, Shape, ShapeError};
pub use gyrus_kernel::{KernelError, KernelIterator, KernelRange, Region};
pub use gyrus_volume::{Volume, VolumeError};
