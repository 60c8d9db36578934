//! The dense labeled grid and its accessors.

use strata_core::{BinaryState, Label, Sentinels};

use crate::dims::Dims;
use crate::error::GridError;

/// A dense 3D grid of labels with toroidal boundaries.
///
/// The cell buffer always holds exactly [`Dims::cell_count`] labels in
/// the canonical x-fastest order (see the crate docs). A grid also
/// carries the [`Sentinels`] that define its binary classification.
///
/// Grids are immutable during a simulation step: the engine reads one
/// grid and writes a structurally copied successor, so cloning is an
/// explicit O(n) buffer copy with no hidden serialization.
///
/// # Examples
///
/// ```
/// use strata_core::{BinaryState, Label, Sentinels};
/// use strata_grid::{Dims, Grid};
///
/// let dims = Dims::new(2, 2, 1).unwrap();
/// let mut grid = Grid::new(dims, Sentinels::binary());
/// assert_eq!(grid.classify_at(0, 0, 0), BinaryState::Zero);
///
/// grid.set(1, 1, 0, Label::new("One")).unwrap();
/// assert_eq!(grid.classify_at(1, 1, 0), BinaryState::One);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dims: Dims,
    sentinels: Sentinels,
    cells: Vec<Label>,
}

impl Grid {
    /// Create a grid filled with the zero sentinel.
    pub fn new(dims: Dims, sentinels: Sentinels) -> Self {
        let cells = vec![sentinels.zero().clone(); dims.cell_count()];
        Self {
            dims,
            sentinels,
            cells,
        }
    }

    /// Create a grid from an existing cell buffer in canonical order.
    ///
    /// Returns `Err(GridError::CellCountMismatch)` if the buffer length
    /// does not equal the dimension product.
    pub fn from_cells(
        dims: Dims,
        sentinels: Sentinels,
        cells: Vec<Label>,
    ) -> Result<Self, GridError> {
        if cells.len() != dims.cell_count() {
            return Err(GridError::CellCountMismatch {
                expected: dims.cell_count(),
                actual: cells.len(),
            });
        }
        Ok(Self {
            dims,
            sentinels,
            cells,
        })
    }

    /// The grid's dimensions.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// The grid's sentinel pair.
    pub fn sentinels(&self) -> &Sentinels {
        &self.sentinels
    }

    /// The flat cell buffer in canonical order.
    pub fn cells(&self) -> &[Label] {
        &self.cells
    }

    /// Mutable access to the flat cell buffer.
    ///
    /// The buffer length is fixed; a slice cannot violate the cell
    /// count invariant. The engine partitions this slice into disjoint
    /// chunks, one writer per worker.
    pub fn cells_mut(&mut self) -> &mut [Label] {
        &mut self.cells
    }

    /// Checked read of the label at `(x, y, z)`.
    pub fn get(&self, x: i32, y: i32, z: i32) -> Result<&Label, GridError> {
        self.check_bounds(x, y, z)?;
        Ok(&self.cells[self.dims.linear_index(x, y, z)])
    }

    /// Checked write of the label at `(x, y, z)`.
    pub fn set(&mut self, x: i32, y: i32, z: i32, label: Label) -> Result<(), GridError> {
        self.check_bounds(x, y, z)?;
        let index = self.dims.linear_index(x, y, z);
        self.cells[index] = label;
        Ok(())
    }

    /// The label at a canonical linear index. Hot-path accessor; the
    /// index must be in range (checked by slice indexing).
    pub fn label_at(&self, index: usize) -> &Label {
        &self.cells[index]
    }

    /// Classify an arbitrary label against this grid's sentinels.
    pub fn classify(&self, label: &Label) -> BinaryState {
        self.sentinels.classify(label)
    }

    /// Classify the cell at `(x, y, z)`. Hot-path accessor; bounds are
    /// checked only in debug builds.
    pub fn classify_at(&self, x: i32, y: i32, z: i32) -> BinaryState {
        self.sentinels
            .classify(&self.cells[self.dims.linear_index(x, y, z)])
    }

    /// Toroidal neighbour coordinate `(x + dx, y + dy, z + dz)`.
    ///
    /// Applies a single modular correction per axis (see
    /// [`Dims::wrap`]). Caller contract: `|dx| < sx`, `|dy| < sy`,
    /// `|dz| < sz`.
    pub fn neighbour(&self, x: i32, y: i32, z: i32, dx: i32, dy: i32, dz: i32) -> (i32, i32, i32) {
        self.dims.wrap(x + dx, y + dy, z + dz)
    }

    fn check_bounds(&self, x: i32, y: i32, z: i32) -> Result<(), GridError> {
        if self.dims.contains(x, y, z) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                coord: (x, y, z),
                bounds: format!(
                    "[0, {}) x [0, {}) x [0, {})",
                    self.dims.sx(),
                    self.dims.sy(),
                    self.dims.sz()
                ),
            })
        }
    }
}
