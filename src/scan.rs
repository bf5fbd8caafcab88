//! Source directory scanning.
//!
//! Lists the images a run will process. The scan is flat (no recursion) and
//! keeps only regular files whose extension is one of the decodable formats
//! reported by [`supported_input_extensions`], compared case-insensitively.
//! The extension is the text after the final `.` of the file name, so a
//! dot-file such as `.png` counts while a bare `png` does not.
//!
//! ```text
//! photos/
//! ├── a.png        ✓
//! ├── b.gif        ✗ unsupported format
//! ├── c.JPEG       ✓ extension match ignores case
//! ├── d            ✗ no extension
//! ├── .png         ✓ text after the final dot
//! └── raw/         ✗ directory
//! ```
//!
//! Results are sorted by path so output indices are reproducible no matter
//! what order the filesystem lists entries in.

use crate::imaging::supported_input_extensions;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read source directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Source is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Eligible source images in `dir`, sorted by path.
pub fn scan(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let read_err = |source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut images: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(read_err)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| is_image(p))
        .collect();

    images.sort();
    Ok(images)
}

/// Whether `path` is a regular file with a supported image extension.
pub fn is_image(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    has_image_extension(path)
}

fn has_image_extension(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    match name.to_string_lossy().rsplit_once('.') {
        Some((_, ext)) => supported_input_extensions().contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}
