//! The [`Pattern`] type: a cubic match window plus a rewrite behavior.

use std::error::Error;
use std::fmt;

use smallvec::SmallVec;
use strata_core::BinaryState;
use strata_grid::Grid;

/// Per-cell requirement inside a pattern's match window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchCell {
    /// The cell must classify as [`BinaryState::Zero`].
    Zero,
    /// The cell must classify as [`BinaryState::One`].
    One,
    /// The cell is unconstrained.
    Any,
}

impl MatchCell {
    /// The classification this cell requires, or `None` for [`Any`](Self::Any).
    pub fn required(self) -> Option<BinaryState> {
        match self {
            Self::Zero => Some(BinaryState::Zero),
            Self::One => Some(BinaryState::One),
            Self::Any => None,
        }
    }
}

/// What a matching pattern writes to the reference cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    /// Write the zero sentinel.
    SetZero,
    /// Write the one sentinel.
    SetOne,
    /// Flip the cell's *previous* classification: a cell that was zero
    /// becomes the one sentinel and vice versa.
    Toggle,
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetZero => write!(f, "SetZero"),
            Self::SetOne => write!(f, "SetOne"),
            Self::Toggle => write!(f, "Toggle"),
        }
    }
}

/// Errors from pattern construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternError {
    /// Pattern size below the minimum of 2. Size-1 windows degenerate
    /// to single-cell rewrites and are rejected.
    SizeTooSmall {
        /// The rejected size.
        size: u32,
    },
    /// The cell buffer length is not `size^3`.
    CellCountMismatch {
        /// Expected length (`size^3`).
        expected: usize,
        /// Actual length.
        actual: usize,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeTooSmall { size } => {
                write!(f, "pattern size {size} below minimum {}", Pattern::MIN_SIZE)
            }
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "pattern cell count {actual} does not match size^3 = {expected}")
            }
        }
    }
}

impl Error for PatternError {}

/// An immutable match/rewrite rule.
///
/// The window anchors at the reference cell's corner: offset
/// `(0, 0, 0)` is the reference cell itself, and the window extends
/// toward positive x, y, z, wrapping around grid faces. The reference
/// cell is only constrained if the window has a non-[`Any`]
/// requirement at the origin.
///
/// Cells are stored in the same x-fastest order the grid uses:
/// `(pz * size + py) * size + px`.
///
/// [`Any`]: MatchCell::Any
///
/// # Examples
///
/// ```
/// use strata_rules::{Behavior, MatchCell, Pattern};
///
/// // A 2x2x2 window that matches anywhere and asserts the one state.
/// let p = Pattern::new(0, 2, vec![MatchCell::Any; 8], Behavior::SetOne).unwrap();
/// assert_eq!(p.size(), 2);
/// assert_eq!(p.to_string(), "<0> (2) SetOne");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    id: u32,
    size: u32,
    cells: SmallVec<[MatchCell; 27]>,
    behavior: Behavior,
}

impl Pattern {
    /// Minimum window size.
    pub const MIN_SIZE: u32 = 2;

    /// Create a pattern, validating the size and cell count.
    pub fn new(
        id: u32,
        size: u32,
        cells: impl IntoIterator<Item = MatchCell>,
        behavior: Behavior,
    ) -> Result<Self, PatternError> {
        if size < Self::MIN_SIZE {
            return Err(PatternError::SizeTooSmall { size });
        }
        let cells: SmallVec<[MatchCell; 27]> = cells.into_iter().collect();
        let expected = (size as usize).pow(3);
        if cells.len() != expected {
            return Err(PatternError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            id,
            size,
            cells,
            behavior,
        })
    }

    /// The pattern's identifier (used only for reporting).
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Window edge length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The rewrite behavior applied on a match.
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// The requirement at window offset `(px, py, pz)`.
    pub fn cell(&self, px: u32, py: u32, pz: u32) -> MatchCell {
        let s = self.size as usize;
        self.cells[(pz as usize * s + py as usize) * s + px as usize]
    }

    /// Whether the window fully agrees with the grid anchored at
    /// `(x, y, z)`.
    ///
    /// Tests every offset in `[0, size)^3`, skipping [`MatchCell::Any`],
    /// and short-circuits on the first disagreement. Caller contract:
    /// the window must be smaller than every grid dimension (single
    /// wrap correction; see [`strata_grid::Dims::wrap`]).
    pub fn matches_at(&self, grid: &Grid, x: i32, y: i32, z: i32) -> bool {
        let s = self.size as i32;
        for pz in 0..s {
            for py in 0..s {
                for px in 0..s {
                    let Some(required) = self.cell(px as u32, py as u32, pz as u32).required()
                    else {
                        continue;
                    };
                    let (tx, ty, tz) = grid.neighbour(x, y, z, px, py, pz);
                    if grid.classify_at(tx, ty, tz) != required {
                        return false;
                    }
                }
            }
        }
        true
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> ({}) {}", self.id, self.size, self.behavior)
    }
}
