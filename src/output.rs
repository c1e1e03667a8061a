//! File naming and grid file writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::GridError;
use crate::grid::{Grid, GridSpec};

/// Default file name for a grid: `<width>x<height>`.
#[must_use]
pub fn default_file_name(spec: &GridSpec) -> String {
    format!("{}x{}", spec.width, spec.height)
}

/// Resolve the output path: `dir` joined with the explicit or default file name.
///
/// The directory is not created.
#[must_use]
pub fn resolve_output_path(dir: &str, file_name: Option<&str>, spec: &GridSpec) -> PathBuf {
    match file_name {
        Some(name) => Path::new(dir).join(name),
        None => Path::new(dir).join(default_file_name(spec)),
    }
}

/// Write a grid to `path`, creating or truncating the file.
///
/// A failure midway may leave a truncated file behind.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_grid_file(grid: &Grid, path: &Path) -> Result<(), GridError> {
    let mut writer = BufWriter::new(File::create(path)?);
    grid.write_to(&mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a grid to standard output.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn write_grid_stdout(grid: &Grid) -> Result<(), GridError> {
    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    grid.write_to(&mut writer)?;
    writer.flush()?;
    Ok(())
}
