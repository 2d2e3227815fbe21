//! The stateful kernel cursor.

use crate::error::KernelError;
use crate::range::KernelRange;
use crate::region::Region;
use gyrus_core::{clamp, Coord, Shape};
use smallvec::SmallVec;

/// A cursor that walks an N-dimensional volume while tracking a fixed
/// stencil of neighbor offsets around its center position.
///
/// The cursor holds, for the center and every neighbor offset, the
/// offset's current ND coordinate (saturated into the region of
/// interest) and its flat row-major address. Both are maintained
/// incrementally: a step along the traversal axis that keeps the whole
/// kernel footprint clamp-free adjusts each cached entry by one stride
/// (the fast path); any other step recomputes the footprint from the
/// new center (the slow path). The traversal axis is the axis with the
/// widest clamp-free interior, so the fast path dominates on real
/// volumes.
///
/// The cursor never touches cell data. Callers read the addresses it
/// produces and index their own flat buffer — see `gyrus-volume`.
///
/// # Traversal
///
/// Forward iteration starts at the region's first cell and ends one
/// step past its last cell, where [`is_end`](Self::is_end) turns true
/// and the cursor parks on the last cell:
///
/// ```
/// use gyrus_core::Shape;
/// use gyrus_kernel::{KernelIterator, KernelRange};
///
/// let shape = Shape::new(&[4, 5]).unwrap();
/// let kernel = KernelRange::symmetric(&[1, 1]).unwrap();
/// let mut it = KernelIterator::new(shape, &kernel).unwrap();
///
/// let mut visited = 0;
/// while !it.is_end() {
///     // 3x3 neighborhood of the current cell, edge-clamped.
///     for k in 0..it.offset_count() {
///         let _ = it.neighbor_address(k);
///     }
///     visited += 1;
///     it.advance();
/// }
/// assert_eq!(visited, 20);
/// ```
///
/// Backward iteration steps off the end sentinel first, then retreats:
///
/// ```
/// # use gyrus_core::Shape;
/// # use gyrus_kernel::{KernelIterator, KernelRange};
/// # let shape = Shape::new(&[4, 5]).unwrap();
/// # let kernel = KernelRange::symmetric(&[1, 1]).unwrap();
/// # let mut it = KernelIterator::new(shape, &kernel).unwrap();
/// it.go_end();
/// it.retreat(); // clear the sentinel; the cursor sits on the last cell
/// let mut visited = 0;
/// loop {
///     visited += 1;
///     if it.is_begin() {
///         break;
///     }
///     it.retreat();
/// }
/// assert_eq!(visited, 20);
/// ```
#[derive(Clone, Debug)]
pub struct KernelIterator {
    shape: Shape,
    region: Region,
    /// Per-axis offset ranges, padded to the shape's dimensionality.
    ranges: SmallVec<[(i32, i32); 4]>,
    /// The axis stepped one unit at a time between carry events.
    axis: usize,
    /// Kernel reach ahead of the center on the traversal axis.
    forward_radius: i32,
    /// Kernel reach behind the center on the traversal axis.
    backward_radius: i32,
    /// The offset table: cartesian product of per-axis ranges, last
    /// axis varying fastest.
    offsets: Vec<Coord>,
    /// Index of the all-zero offset within the table.
    center_index: usize,
    /// Current region-saturated coordinate of every offset.
    positions: Vec<Coord>,
    /// Current flat address of every offset.
    addresses: Vec<usize>,
    /// One step past the region's last cell.
    end: bool,
}

impl KernelIterator {
    /// Create a cursor over the full extent of `shape`.
    ///
    /// Equivalent to [`with_region`](Self::with_region) with
    /// [`Region::full`].
    pub fn new(shape: Shape, kernel: &KernelRange) -> Result<Self, KernelError> {
        let region = Region::full(&shape);
        Self::with_region(shape, kernel, region)
    }

    /// Create a cursor confined to `region`.
    ///
    /// The kernel range may name fewer axes than the shape; trailing
    /// axes are padded with `(0, 0)` and carry no neighbors. The cursor
    /// starts at the region's first cell.
    ///
    /// Returns `Err(KernelError::DimensionMismatch)` if the kernel
    /// names more axes than the shape or the region's arity differs
    /// from the shape's, `Err(KernelError::RegionOutOfBounds)` if the
    /// region extends outside the shape, or
    /// `Err(KernelError::TooManyOffsets)` if the offset count
    /// overflows.
    pub fn with_region(
        shape: Shape,
        kernel: &KernelRange,
        region: Region,
    ) -> Result<Self, KernelError> {
        let ndim = shape.ndim();
        if kernel.ndim() > ndim {
            return Err(KernelError::DimensionMismatch {
                expected: ndim,
                got: kernel.ndim(),
            });
        }
        region.validate_for(&shape)?;

        let mut ranges: SmallVec<[(i32, i32); 4]> = SmallVec::from_slice(kernel.ranges());
        ranges.resize(ndim, (0, 0));

        // Traversal axis: widest clamp-free interior, first maximum wins.
        let mut axis = 0usize;
        let mut best = i64::MIN;
        for (d, &(min, max)) in ranges.iter().enumerate() {
            let interior = shape.extent(d) as i64 + min as i64 - max as i64;
            if interior > best {
                best = interior;
                axis = d;
            }
        }
        let forward_radius = ranges[axis].1;
        let backward_radius = -ranges[axis].0;

        // Offset count and the zero offset's table index, by
        // mixed-radix arithmetic over per-axis spans (last axis has
        // stride 1 in the table).
        let mut offset_count = 1usize;
        let mut center_index = 0usize;
        for &(min, max) in ranges.iter().rev() {
            let span = (max as i64 - min as i64 + 1) as usize;
            center_index += (-(min as i64)) as usize * offset_count;
            offset_count = offset_count
                .checked_mul(span)
                .ok_or(KernelError::TooManyOffsets)?;
        }

        // Materialize the table with an odometer, rightmost axis fastest.
        let mut offsets = Vec::with_capacity(offset_count);
        let mut current: Coord = ranges.iter().map(|&(min, _)| min).collect();
        loop {
            offsets.push(current.clone());
            let mut carry = true;
            for d in (0..ndim).rev() {
                if carry {
                    if current[d] < ranges[d].1 {
                        current[d] += 1;
                        carry = false;
                    } else {
                        current[d] = ranges[d].0;
                    }
                }
            }
            if carry {
                break;
            }
        }

        let positions = vec![SmallVec::from_elem(0, ndim); offset_count];
        let addresses = vec![0usize; offset_count];

        let mut cursor = Self {
            shape,
            region,
            ranges,
            axis,
            forward_radius,
            backward_radius,
            offsets,
            center_index,
            positions,
            addresses,
            end: false,
        };
        cursor.go_begin();
        Ok(cursor)
    }

    /// Replace the cursor's configuration and state in place.
    ///
    /// On error the cursor is left untouched.
    pub fn reinit(
        &mut self,
        shape: Shape,
        kernel: &KernelRange,
        region: Region,
    ) -> Result<(), KernelError> {
        *self = Self::with_region(shape, kernel, region)?;
        Ok(())
    }

    // ── Accessors ───────────────────────────────────────────────

    /// The shape the cursor walks over.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The region of interest confining the cursor.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// The axis the cursor steps along between carry events.
    pub fn traversal_axis(&self) -> usize {
        self.axis
    }

    /// Number of entries in the offset table (center included).
    pub fn offset_count(&self) -> usize {
        self.offsets.len()
    }

    /// Table index of the all-zero (center) offset.
    pub fn center_index(&self) -> usize {
        self.center_index
    }

    /// The `(min, max)` offset range on a single axis, after padding.
    pub fn offset_range(&self, axis: usize) -> (i32, i32) {
        self.ranges[axis]
    }

    /// The offset vector at a table index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= offset_count()`.
    pub fn offset(&self, index: usize) -> &[i32] {
        &self.offsets[index]
    }

    /// Flat address of the center cell.
    pub fn center_address(&self) -> usize {
        self.addresses[self.center_index]
    }

    /// ND coordinate of the center cell.
    pub fn center_position(&self) -> &[i32] {
        &self.positions[self.center_index]
    }

    /// Flat address of the neighbor at a table index.
    ///
    /// The center's own index yields the cursor's address. The address
    /// is already saturated into the region — a footprint never escapes
    /// it.
    ///
    /// # Panics
    ///
    /// Panics if `index >= offset_count()`.
    pub fn neighbor_address(&self, index: usize) -> usize {
        self.addresses[index]
    }

    /// Flat address and ND coordinate of the neighbor at a table index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= offset_count()`.
    pub fn neighbor(&self, index: usize) -> (usize, &[i32]) {
        (self.addresses[index], &self.positions[index])
    }

    /// Flat addresses of the whole footprint, in offset-table order.
    pub fn addresses(&self) -> &[usize] {
        &self.addresses
    }

    /// Whether the cursor sits on the region's first cell (and the end
    /// sentinel is clear).
    pub fn is_begin(&self) -> bool {
        !self.end
            && self.positions[self.center_index]
                .iter()
                .zip(&self.region.lo)
                .all(|(&c, &lo)| c == lo)
    }

    /// Whether the cursor has stepped past the region's last cell.
    ///
    /// The last cell itself is not `is_end`; the sentinel turns true
    /// one [`advance`](Self::advance) later (or via
    /// [`go_end`](Self::go_end)).
    pub fn is_end(&self) -> bool {
        self.end
    }

    // ── Cursor movement ─────────────────────────────────────────

    /// Step forward one cell and return the resulting center address.
    ///
    /// Stepping past the region's last cell raises the end sentinel and
    /// parks the cursor on that cell; further calls are no-ops that
    /// keep returning its address.
    pub fn advance(&mut self) -> usize {
        if self.end {
            return self.addresses[self.center_index];
        }
        let c = self.positions[self.center_index][self.axis];
        if c - self.backward_radius >= self.region.lo[self.axis]
            && c + self.forward_radius < self.region.hi[self.axis]
        {
            self.shift_along_axis(true);
        } else {
            self.step_carry(true);
        }
        self.addresses[self.center_index]
    }

    /// Step backward one cell and return the resulting center address.
    ///
    /// A no-op at the region's first cell. With the end sentinel
    /// raised, a single retreat clears it and the cursor stays on the
    /// last cell — the mirror image of the advance that raised it.
    pub fn retreat(&mut self) -> usize {
        if self.is_begin() {
            return self.addresses[self.center_index];
        }
        if self.end {
            self.end = false;
            return self.addresses[self.center_index];
        }
        let c = self.positions[self.center_index][self.axis];
        if c - self.backward_radius > self.region.lo[self.axis]
            && c + self.forward_radius <= self.region.hi[self.axis]
        {
            self.shift_along_axis(false);
        } else {
            self.step_carry(false);
        }
        self.addresses[self.center_index]
    }

    /// Step forward, returning the center address from *before* the
    /// step (the `fetch_add` convention).
    pub fn fetch_advance(&mut self) -> usize {
        let before = self.addresses[self.center_index];
        self.advance();
        before
    }

    /// Step backward, returning the center address from *before* the
    /// step.
    pub fn fetch_retreat(&mut self) -> usize {
        let before = self.addresses[self.center_index];
        self.retreat();
        before
    }

    // ── Direct positioning ──────────────────────────────────────

    /// Move the cursor to the region-saturated version of `target` and
    /// rebuild the footprint.
    ///
    /// Clears the end sentinel unconditionally. Returns whether
    /// saturation altered any coordinate of the request.
    ///
    /// Returns `Err(KernelError::DimensionMismatch)` — with the cursor
    /// left untouched — if `target` has the wrong arity.
    pub fn go_to(&mut self, target: &[i32]) -> Result<bool, KernelError> {
        if target.len() != self.ndim() {
            return Err(KernelError::DimensionMismatch {
                expected: self.ndim(),
                got: target.len(),
            });
        }
        let mut clamped = false;
        let mut center: Coord = SmallVec::with_capacity(target.len());
        for (d, &t) in target.iter().enumerate() {
            let c = clamp(t, self.region.lo[d], self.region.hi[d]);
            clamped |= c != t;
            center.push(c);
        }
        self.end = false;
        self.recompute_from(&center);
        Ok(clamped)
    }

    /// Move the cursor to the region's first cell and clear the end
    /// sentinel.
    pub fn go_begin(&mut self) {
        let lo = self.region.lo.clone();
        self.end = false;
        self.recompute_from(&lo);
    }

    /// Move the cursor to the region's last cell and raise the end
    /// sentinel.
    pub fn go_end(&mut self) {
        let hi = self.region.hi.clone();
        self.end = true;
        self.recompute_from(&hi);
    }

    // ── Internals ───────────────────────────────────────────────

    /// Fast path: the whole footprint stays clamp-free on the traversal
    /// axis, so every cached coordinate and address moves by one unit.
    fn shift_along_axis(&mut self, forward: bool) {
        let stride = self.shape.stride(self.axis);
        for (pos, addr) in self.positions.iter_mut().zip(&mut self.addresses) {
            if forward {
                pos[self.axis] += 1;
                *addr += stride;
            } else {
                pos[self.axis] -= 1;
                *addr -= stride;
            }
        }
    }

    /// Slow path: move the center with carry propagation (traversal
    /// axis first, then the remaining axes last-to-first), wrapping
    /// exhausted axes to their region bound. A forward carry out of the
    /// final axis raises the end sentinel without touching committed
    /// state; otherwise the footprint is rebuilt from the new center.
    fn step_carry(&mut self, forward: bool) {
        let ndim = self.ndim();
        let axis = self.axis;
        let mut next = self.positions[self.center_index].clone();
        let mut moved = false;
        let scan = std::iter::once(axis).chain((0..ndim).rev().filter(move |&d| d != axis));
        for d in scan {
            if forward {
                if next[d] < self.region.hi[d] {
                    next[d] += 1;
                    moved = true;
                    break;
                }
                next[d] = self.region.lo[d];
            } else {
                if next[d] > self.region.lo[d] {
                    next[d] -= 1;
                    moved = true;
                    break;
                }
                next[d] = self.region.hi[d];
            }
        }
        if moved {
            self.recompute_from(&next);
        } else if forward {
            self.end = true;
        }
        // A backward carry-out cannot happen: retreat() returns early
        // at the region's first cell.
    }

    /// Rebuild every offset's coordinate and address from `center`.
    fn recompute_from(&mut self, center: &Coord) {
        let ndim = center.len();
        for (k, offset) in self.offsets.iter().enumerate() {
            let mut address = 0usize;
            let pos = &mut self.positions[k];
            for d in 0..ndim {
                let c = clamp(
                    center[d] as i64 + offset[d] as i64,
                    self.region.lo[d] as i64,
                    self.region.hi[d] as i64,
                ) as i32;
                pos[d] = c;
                address += c as usize * self.shape.stride(d);
            }
            self.addresses[k] = address;
        }
    }
}
