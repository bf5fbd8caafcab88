//! High-level thumbnail operations.
//!
//! These functions combine calculations with backend execution. They take a
//! sizing policy, compute the target size, and call the backend for I/O.

use super::backend::{BackendError, ImageBackend};
use super::calculations::resolve_target_dimensions;
use super::params::{Dimensions, SizingPolicy};
use super::resample::resample;
use image::RgbImage;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Sizes involved in one generated thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedThumbnail {
    pub source: Dimensions,
    pub target: Dimensions,
}

/// Resolve the target size and downsample an in-memory image.
pub fn thumbnail_image(image: &RgbImage, policy: &SizingPolicy) -> (RgbImage, Dimensions) {
    let source = Dimensions::new(image.width(), image.height());
    let target = resolve_target_dimensions(source, policy);
    (resample(image, target), target)
}

/// Create a thumbnail: decode `source`, downsample, write PNG to `output`.
pub fn create_thumbnail(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    policy: &SizingPolicy,
) -> Result<GeneratedThumbnail> {
    let image = backend.decode(source)?;
    if image.width() == 0 || image.height() == 0 {
        return Err(BackendError::EmptyImage(source.to_path_buf()));
    }

    let (thumbnail, target) = thumbnail_image(&image, policy);
    tracing::debug!(
        source = %source.display(),
        from = %Dimensions::new(image.width(), image.height()),
        to = %target,
        "resampled"
    );
    backend.encode_png(&thumbnail, output)?;

    Ok(GeneratedThumbnail {
        source: Dimensions::new(image.width(), image.height()),
        target,
    })
}
