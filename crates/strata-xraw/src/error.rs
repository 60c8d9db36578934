//! Error types for XRAW encoding.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors from XRAW encoding and file writing.
///
/// All fatal conditions are detected before any output byte is
/// produced — a failed encode never leaves a truncated artifact.
#[derive(Debug)]
pub enum EncodeError {
    /// The grid's cell buffer length does not match its declared
    /// dimensions.
    StructuralMismatch {
        /// Expected cell count (`sx * sy * sz`).
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
    /// More referenced colors (including the synthesized empty entry)
    /// than the 255 non-reserved palette slots can hold.
    PaletteOverflow {
        /// Number of colors that would be required.
        count: usize,
    },
    /// The destination file exists and overwriting was not permitted.
    AlreadyExists {
        /// The colliding path.
        path: PathBuf,
    },
    /// An I/O error while writing the artifact.
    Io(io::Error),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StructuralMismatch { expected, actual } => {
                write!(
                    f,
                    "grid cell count {actual} does not match declared dimensions ({expected} cells)"
                )
            }
            Self::PaletteOverflow { count } => {
                write!(f, "{count} referenced colors exceed the 255-color palette")
            }
            Self::AlreadyExists { path } => {
                write!(
                    f,
                    "output file {} already exists and overwriting is not permitted",
                    path.display()
                )
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl Error for EncodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for EncodeError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
