//! Output filename generation.
//!
//! Every thumbnail is a PNG named from a prefix and its position in the
//! sorted source list. Two schemes are available:
//!
//! - `sequential` (default): `thumbnail0.png`, `thumbnail1.png`, …
//! - `source`: the source stem is appended, `thumbnail0-beach.png`, so a
//!   thumbnail can be traced back to its original at a glance.
//!
//! The index always comes first, so names stay unique even when two sources
//! share a stem (`beach.jpg` and `beach.png`).
//!
//! Indices are fixed from the sorted source list before any image is
//! decoded. A source that fails later keeps its index, so its number is
//! simply missing from the output: with `a.png`, a corrupt `b.jpg` and
//! `c.png`, the run writes `thumbnail0.png` and `thumbnail2.png`.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// How output filenames are built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingScheme {
    #[default]
    Sequential,
    Source,
}

/// Output extension; thumbnails are always PNG regardless of source format.
pub const OUTPUT_EXTENSION: &str = "png";

/// Build the output filename for the image at `index` in the sorted list.
///
/// - `(Sequential, "thumbnail", 3, "x/beach.jpg")` → `"thumbnail3.png"`
/// - `(Source, "thumbnail", 3, "x/beach.jpg")` → `"thumbnail3-beach.png"`
/// - `(Source, "thumb", 0, "x/.hidden")` → `"thumb0-.hidden.png"`
pub fn output_filename(scheme: NamingScheme, prefix: &str, index: usize, source: &Path) -> String {
    match scheme {
        NamingScheme::Sequential => format!("{prefix}{index}.{OUTPUT_EXTENSION}"),
        NamingScheme::Source => {
            let stem = source
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            if stem.is_empty() {
                format!("{prefix}{index}.{OUTPUT_EXTENSION}")
            } else {
                format!("{prefix}{index}-{stem}.{OUTPUT_EXTENSION}")
            }
        }
    }
}
