//! Stencil filters for Gyrus volumes.
//!
//! Sliding-window operations built on the kernel cursor: local (box)
//! mean smoothing and morphological erosion/dilation. All filters use
//! replicate-edge semantics — at volume (or region) borders the
//! footprint saturates, so edge cells contribute duplicated samples
//! instead of shrinking the window.
//!
//! Region-restricted variants recompute only the cells inside a
//! [`Region`](gyrus_kernel::Region); everything outside is copied from
//! the source unchanged.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod morphology;
pub mod smoothing;

pub use morphology::{dilate, erode, morphology, morphology_region, MorphOp};
pub use smoothing::{box_mean, box_mean_region};
