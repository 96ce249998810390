//! Shared file I/O helpers.

use std::{
    fs::{create_dir_all, read, write},
    path::Path,
};

use anyhow::{Context, Result};

/// Read font data from a file.
pub fn read_font(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    read(path).with_context(|| format!("Failed to read font: {}", path.display()))
}

/// Write a generated text artifact.
pub fn write_output(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    write(path, contents).with_context(|| format!("Failed to write output: {}", path.display()))
}

/// Create a directory and its parents if they don't exist.
pub fn ensure_dir(path: &Path) -> Result<()> {
    create_dir_all(path).with_context(|| format!("Failed to create directory: {}", path.display()))
}
