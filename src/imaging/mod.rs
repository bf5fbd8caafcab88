//! Image processing in pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (PNG, JPEG) → RGB8 |
//! | **Size** | [`resolve_target_dimensions`] over a [`SizingPolicy`] |
//! | **Downsample** | [`resample`]: uniform scale, centered, neighborhood average |
//! | **Encode** | `image::codecs::png::PngEncoder` |
//!
//! The module is split into:
//! - **Parameters**: [`SizingPolicy`] and [`Dimensions`]
//! - **Calculations**: Pure functions for target size and sampling geometry
//! - **Resample**: The downsampling transform (pure, allocation only)
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining the above

pub mod backend;
mod calculations;
pub mod operations;
mod params;
mod resample;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{SampleGrid, resolve_target_dimensions, sample_grid};
pub use operations::{GeneratedThumbnail, create_thumbnail, thumbnail_image};
pub use params::{Dimensions, SizingError, SizingPolicy};
pub use resample::resample;
pub use rust_backend::{RustBackend, supported_input_extensions};
