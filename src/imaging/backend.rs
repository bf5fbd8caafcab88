//! Image codec backend trait and shared types.
//!
//! The [`ImageBackend`] trait covers the two codec operations the pipeline
//! needs: decode a source file into an RGB8 buffer, and encode a buffer as
//! PNG. Resampling itself is not part of the backend; it is a pure function
//! in [`resample`](super::resample).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend).

use image::RgbImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },
    #[error("Failed to encode {}: {message}", .path.display())]
    Encode { path: PathBuf, message: String },
    #[error("Image has no pixels: {}", .0.display())]
    EmptyImage(PathBuf),
}

/// Trait for image codec backends.
///
/// `Sync` so a single backend can be shared across rayon workers.
pub trait ImageBackend: Sync {
    /// Decode an image file into 8-bit RGB. Alpha, if any, is dropped.
    fn decode(&self, path: &Path) -> Result<RgbImage, BackendError>;

    /// Encode `image` as PNG at `path`.
    fn encode_png(&self, image: &RgbImage, path: &Path) -> Result<(), BackendError>;
}
