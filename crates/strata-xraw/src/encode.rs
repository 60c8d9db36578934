//! Grid-to-XRAW encoding.

use std::fmt;
use std::io::Write;

use strata_core::Label;
use strata_grid::{Dims, Grid};

use crate::color::ColorTable;
use crate::error::EncodeError;
use crate::palette::Palette;
use crate::{HEADER_LEN, MAGIC, PALETTE_SIZE};

/// An advisory condition noticed during encoding.
///
/// Warnings never abort an encode; the artifact is still written with
/// the documented substitutions applied. Callers decide whether to
/// surface them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodeWarning {
    /// No grid label had a color table entry, so this label rendered
    /// with no color of its own.
    Unrecognized {
        /// The unmapped label.
        label: Label,
    },
    /// The empty label (or the reserved `ignore` label) had no table
    /// entry and was rendered as the transparent empty slot.
    TreatedAsEmpty {
        /// The label resolved to slot 0.
        label: Label,
    },
    /// A label with no table entry was rendered with the fallback
    /// slot's color.
    Fallback {
        /// The unmapped label.
        label: Label,
        /// The palette slot the label resolved to.
        slot: u8,
        /// The color name occupying that slot, when the palette holds
        /// more than one referenced color.
        substitute: Option<Label>,
    },
}

impl fmt::Display for EncodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized { label } => {
                write!(f, "no color table entry matched any grid label: {label}")
            }
            Self::TreatedAsEmpty { label } => {
                write!(f, "label {label} has no color and was treated as empty")
            }
            Self::Fallback {
                label,
                slot,
                substitute: Some(name),
            } => {
                write!(f, "label {label} has no color, using slot {slot} ({name})")
            }
            Self::Fallback {
                label,
                slot,
                substitute: None,
            } => {
                write!(f, "label {label} has no color, using slot {slot}")
            }
        }
    }
}

/// Encode a grid into a freshly allocated XRAW byte buffer.
///
/// Pure with respect to its inputs: the same grid, table, and empty
/// label always yield byte-identical output. The buffer length is
/// always `24 + cell_count + 1024`.
///
/// # Errors
///
/// [`EncodeError::PaletteOverflow`] if more than 255 colors would be
/// referenced.
///
/// # Examples
///
/// ```
/// use strata_core::{Label, Sentinels};
/// use strata_grid::{Dims, Grid};
/// use strata_xraw::{encode, ColorDefinition, ColorTable};
///
/// let sentinels = Sentinels::new(Label::new("air"), Label::new("rock"));
/// let grid = Grid::new(Dims::new(2, 2, 1).unwrap(), sentinels);
/// let table: ColorTable = [ColorDefinition::new("air", 0, 0, 0, 0)].into_iter().collect();
///
/// let (bytes, warnings) = encode(&grid, &table, &Label::new("air")).unwrap();
/// assert_eq!(bytes.len(), 24 + 4 + 1024);
/// assert!(warnings.is_empty());
/// ```
pub fn encode(
    grid: &Grid,
    table: &ColorTable,
    empty: &Label,
) -> Result<(Vec<u8>, Vec<EncodeWarning>), EncodeError> {
    let mut buf = Vec::with_capacity(HEADER_LEN + grid.dims().cell_count() + PALETTE_SIZE * 4);
    let warnings = encode_into(&mut buf, grid, table, empty)?;
    Ok((buf, warnings))
}

/// Encode a grid into an arbitrary writer.
///
/// All fatal conditions are checked before the first byte is written,
/// so an `Err` other than [`EncodeError::Io`] leaves the writer
/// untouched.
pub fn encode_into<W: Write>(
    writer: &mut W,
    grid: &Grid,
    table: &ColorTable,
    empty: &Label,
) -> Result<Vec<EncodeWarning>, EncodeError> {
    encode_parts(writer, grid.dims(), grid.cells(), table, empty)
}

/// Encoding over raw parts. The public entry points pass a [`Grid`],
/// whose constructor already guarantees the length invariant; taking
/// the slice separately keeps the structural check testable.
fn encode_parts<W: Write>(
    writer: &mut W,
    dims: Dims,
    cells: &[Label],
    table: &ColorTable,
    empty: &Label,
) -> Result<Vec<EncodeWarning>, EncodeError> {
    let expected = dims.cell_count();
    if cells.len() != expected {
        return Err(EncodeError::StructuralMismatch {
            expected,
            actual: cells.len(),
        });
    }

    let (palette, warnings) = Palette::build(cells, table, empty)?;

    // Header.
    writer.write_all(&MAGIC)?;
    // Channel type, channel count, bits per channel, bits per index.
    writer.write_all(&[0, 4, 8, 8])?;
    writer.write_all(&(dims.sx() as i32).to_le_bytes())?;
    writer.write_all(&(dims.sy() as i32).to_le_bytes())?;
    writer.write_all(&(dims.sz() as i32).to_le_bytes())?;
    writer.write_all(&(PALETTE_SIZE as i32).to_le_bytes())?;

    // Voxel buffer: one palette index per cell, already in canonical
    // x-fastest order in the grid's backing store.
    let mut indices = Vec::with_capacity(cells.len());
    for label in cells {
        indices.push(palette.slot_for(label, empty));
    }
    writer.write_all(&indices)?;

    // Palette buffer: assigned slots, then the filler ramp.
    let colors = palette.colors();
    for slot in 0..PALETTE_SIZE {
        match colors.get(slot) {
            Some(color) => writer.write_all(&color.rgba())?,
            None => {
                let v = slot as u8;
                writer.write_all(&[v, v, v, 255])?;
            }
        }
    }

    Ok(warnings)
}
