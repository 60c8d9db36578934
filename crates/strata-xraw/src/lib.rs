//! XRAW voxel container encoding.
//!
//! Serializes a finished grid generation plus an ordered color table
//! into the fixed-layout, 256-slot palette-indexed XRAW format.
//! Encoding is a pure function of its inputs: identical grid, table,
//! and empty label produce byte-identical output.
//!
//! # Format
//!
//! ```text
//! offset  size  field
//! 0       4     magic bytes "XRAW"
//! 4       1     channel type marker (0 = unsigned)
//! 5       1     channel count (4 = RGBA)
//! 6       1     bits per channel (8)
//! 7       1     bits per index (8)
//! 8       4     size x (i32 LE)
//! 12      4     size y (i32 LE)
//! 16      4     size z (i32 LE)
//! 20      4     palette size (i32 LE, always 256)
//! 24      N     one palette index byte per cell, canonical x-fastest order
//! 24+N    1024  256 palette entries x 4 bytes RGBA; unused slots hold
//!               the filler (i, i, i, 255) for slot i
//! ```
//!
//! Palette slot 0 always holds the empty label's color; if the color
//! table has no entry for the empty label a fully transparent black is
//! synthesized. Labels with no table entry resolve to slot 1 and are
//! reported through the returned warning list — the codec itself never
//! prints anything.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod encode;
pub mod error;
mod palette;
pub mod writer;

pub use color::{ColorDefinition, ColorTable};
pub use encode::{encode, encode_into, EncodeWarning};
pub use error::EncodeError;
pub use writer::write_to_path;

/// Magic bytes at the start of every XRAW file.
pub const MAGIC: [u8; 4] = *b"XRAW";

/// Number of palette slots in the container (fixed by the format).
pub const PALETTE_SIZE: usize = 256;

/// Header length in bytes.
pub const HEADER_LEN: usize = 24;

/// Palette slot for cells whose label has no color table entry.
pub const FALLBACK_SLOT: u8 = 1;

/// Reserved label treated as empty when absent from the color table.
pub const IGNORE_LABEL: &str = "ignore";
