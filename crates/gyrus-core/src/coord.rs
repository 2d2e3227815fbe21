//! The [`Coord`] type alias.

use smallvec::SmallVec;

/// A coordinate in an N-dimensional volume.
///
/// Uses `SmallVec<[i32; 4]>` to avoid heap allocation for volumes up to
/// 4 dimensions, covering the common volumetric cases (3D scans, 4D
/// time series). Higher-dimensional volumes spill to the heap
/// transparently.
pub type Coord = SmallVec<[i32; 4]>;
