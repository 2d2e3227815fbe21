//! Flat N-dimensional volume storage for the Gyrus toolkit.
//!
//! A [`Volume`] owns a contiguous buffer addressed by the row-major
//! flat indices that [`gyrus_core::Shape`] (and the kernel iterator
//! built on it) produce. The volume is a plain value: it is sized once
//! at construction from the product of its per-axis extents, carries no
//! manual lifetime management, and never participates in iteration
//! state — cursors hand out addresses, callers index the volume.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod volume;

pub use error::VolumeError;
pub use volume::Volume;
