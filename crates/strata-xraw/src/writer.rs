//! Writing XRAW artifacts to the filesystem.

use std::fs;
use std::path::Path;

use strata_core::Label;
use strata_grid::Grid;

use crate::color::ColorTable;
use crate::encode::{encode, EncodeWarning};
use crate::error::EncodeError;

/// Encode a grid and write the artifact to `path`.
///
/// The encode runs entirely in memory before the file is touched, so a
/// failed encode never creates or truncates the destination. With
/// `overwrite` false an existing file is an error; with it true the
/// file is replaced.
///
/// # Errors
///
/// [`EncodeError::AlreadyExists`] if the destination exists and
/// `overwrite` is false, any encoding error from [`encode`], or
/// [`EncodeError::Io`] from the filesystem.
pub fn write_to_path(
    path: impl AsRef<Path>,
    grid: &Grid,
    table: &ColorTable,
    empty: &Label,
    overwrite: bool,
) -> Result<Vec<EncodeWarning>, EncodeError> {
    let path = path.as_ref();
    if !overwrite && path.exists() {
        return Err(EncodeError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    let (bytes, warnings) = encode(grid, table, empty)?;
    fs::write(path, bytes)?;
    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};
    use strata_core::Sentinels;
    use strata_grid::Dims;

    fn scratch_path(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("strata-xraw-{tag}-{}-{nanos}.xraw", std::process::id()))
    }

    fn air_grid() -> Grid {
        let sentinels = Sentinels::new(Label::new("air"), Label::new("rock"));
        Grid::new(Dims::new(2, 2, 1).unwrap(), sentinels)
    }

    #[test]
    fn writes_the_encoded_bytes() {
        let grid = air_grid();
        let table = ColorTable::new();
        let empty = Label::new("air");
        let path = scratch_path("roundtrip");

        write_to_path(&path, &grid, &table, &empty, false).unwrap();
        let on_disk = fs::read(&path).unwrap();
        let (expected, _) = encode(&grid, &table, &empty).unwrap();
        assert_eq!(on_disk, expected);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn existing_file_is_an_error_without_overwrite() {
        let grid = air_grid();
        let path = scratch_path("collision");
        fs::write(&path, b"sentinel").unwrap();

        let err =
            write_to_path(&path, &grid, &ColorTable::new(), &Label::new("air"), false)
                .unwrap_err();
        assert!(matches!(err, EncodeError::AlreadyExists { .. }));
        // The original content survives.
        assert_eq!(fs::read(&path).unwrap(), b"sentinel");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn overwrite_replaces_existing_content() {
        let grid = air_grid();
        let path = scratch_path("overwrite");
        fs::write(&path, b"stale").unwrap();

        write_to_path(&path, &grid, &ColorTable::new(), &Label::new("air"), true).unwrap();
        let on_disk = fs::read(&path).unwrap();
        assert_eq!(on_disk.len(), 24 + 4 + 1024);
        assert_eq!(&on_disk[0..4], b"XRAW");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn failed_encode_creates_no_file() {
        use crate::color::ColorDefinition;

        let names: Vec<String> = (0..255).map(|i| format!("m{i}")).collect();
        let sentinels = Sentinels::new(Label::new(names[0].as_str()), Label::new("rock"));
        let mut grid = Grid::new(Dims::new(255, 1, 1).unwrap(), sentinels);
        for (x, name) in names.iter().enumerate() {
            grid.set(x as i32, 0, 0, Label::new(name)).unwrap();
        }
        let table: ColorTable = names
            .iter()
            .map(|n| ColorDefinition::new(n.as_str(), 1, 1, 1, 255))
            .collect();

        let path = scratch_path("failed");
        let err = write_to_path(&path, &grid, &table, &Label::new("air"), false).unwrap_err();
        assert!(matches!(err, EncodeError::PaletteOverflow { .. }));
        assert!(!path.exists());
    }
}
