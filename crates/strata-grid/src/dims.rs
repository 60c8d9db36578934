//! Grid dimensions, canonical linear indexing, and toroidal wrap.

use crate::error::GridError;

/// Validated grid dimensions `(sx, sy, sz)`.
///
/// Each axis is at least 1 and at most `i32::MAX`, and the cell count
/// `sx * sy * sz` fits in `usize`. Coordinates are `i32` so that
/// neighbour offsets can be applied without casts.
///
/// # Examples
///
/// ```
/// use strata_grid::Dims;
///
/// let dims = Dims::new(4, 3, 2).unwrap();
/// assert_eq!(dims.cell_count(), 24);
/// // x-fastest canonical order.
/// assert_eq!(dims.linear_index(1, 0, 0), 1);
/// assert_eq!(dims.linear_index(0, 1, 0), 4);
/// assert_eq!(dims.linear_index(0, 0, 1), 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dims {
    sx: u32,
    sy: u32,
    sz: u32,
}

impl Dims {
    /// Maximum per-axis extent: coordinates use `i32`.
    pub const MAX_EXTENT: u32 = i32::MAX as u32;

    /// Create validated dimensions.
    ///
    /// Returns `Err(GridError::ZeroDimension)` if any axis is zero,
    /// `Err(GridError::DimensionTooLarge)` if any axis exceeds
    /// [`MAX_EXTENT`](Self::MAX_EXTENT), or `Err(GridError::TooManyCells)`
    /// if the product overflows `usize`.
    pub fn new(sx: u32, sy: u32, sz: u32) -> Result<Self, GridError> {
        for (axis, value) in [("x", sx), ("y", sy), ("z", sz)] {
            if value == 0 {
                return Err(GridError::ZeroDimension { axis });
            }
            if value > Self::MAX_EXTENT {
                return Err(GridError::DimensionTooLarge { axis, value });
            }
        }
        let product = (sx as u128) * (sy as u128) * (sz as u128);
        if usize::try_from(product).is_err() {
            return Err(GridError::TooManyCells);
        }
        Ok(Self { sx, sy, sz })
    }

    /// Extent along x.
    pub fn sx(&self) -> u32 {
        self.sx
    }

    /// Extent along y.
    pub fn sy(&self) -> u32 {
        self.sy
    }

    /// Extent along z.
    pub fn sz(&self) -> u32 {
        self.sz
    }

    /// Total number of cells (`sx * sy * sz`).
    pub fn cell_count(&self) -> usize {
        self.sx as usize * self.sy as usize * self.sz as usize
    }

    /// Whether a coordinate lies inside `[0, dim)` on every axis.
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && (x as u32) < self.sx
            && y >= 0
            && (y as u32) < self.sy
            && z >= 0
            && (z as u32) < self.sz
    }

    /// Canonical linear index, x-fastest: `(z * sy + y) * sx + x`.
    ///
    /// The coordinate must be in bounds; checked only in debug builds.
    pub fn linear_index(&self, x: i32, y: i32, z: i32) -> usize {
        debug_assert!(self.contains(x, y, z), "({x}, {y}, {z}) out of bounds");
        (z as usize * self.sy as usize + y as usize) * self.sx as usize + x as usize
    }

    /// Wrap an out-of-range coordinate back onto the torus with a
    /// single modular correction per axis.
    ///
    /// Each axis is corrected at most once: a negative value gains
    /// exactly one dimension length, a value at or past the extent
    /// loses exactly one. This is cheaper than a full modulo and is
    /// correct only under the caller contract that every offset
    /// magnitude is smaller than the corresponding extent (pattern
    /// size < grid dimension). The contract is not checked here.
    pub fn wrap(&self, x: i32, y: i32, z: i32) -> (i32, i32, i32) {
        (
            wrap_axis(x, self.sx),
            wrap_axis(y, self.sy),
            wrap_axis(z, self.sz),
        )
    }
}

/// Single-correction wrap along one axis. Valid for `-len < v < 2*len`.
fn wrap_axis(v: i32, len: u32) -> i32 {
    let len = len as i32;
    if v < 0 {
        v + len
    } else if v >= len {
        v - len
    } else {
        v
    }
}
