//! # Thumbnailer
//!
//! Turns a directory of PNG and JPEG images into PNG thumbnails using an
//! area-averaging downsampler.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan       FROM/        →  sorted list of eligible images
//! 2. Plan       sources      →  jobs with fixed output names (thumbnail<N>.png)
//! 3. Process    each job     →  decode → size → resample → encode, in parallel
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists eligible source images (png/jpg/jpeg, case-insensitive), sorted |
//! | [`imaging`] | Sizing policies, the downsampling transform, codec backend |
//! | [`naming`] | Output filename schemes |
//! | [`process`] | Batch orchestration: planning, collision checks, parallel jobs, events |
//! | [`config`] | Optional TOML run configuration layered over stock defaults |
//! | [`output`] | CLI progress and summary formatting |
//!
//! # Design Decisions
//!
//! ## Uniform Scale, Centered
//!
//! The downsampler never stretches. Both axes share one stride (the smaller
//! of the two per-axis shrink factors) and the covered region is centered in
//! the source. When the requested box has a different aspect ratio than the
//! source, the excess is cropped evenly from both sides.
//!
//! ## Never Upscale
//!
//! Whatever the policy asks for, the resolved size is clamped to the source
//! size on each axis. A 40×40 source asked for 100×100 yields 40×40.
//!
//! ## Skip, Don't Abort
//!
//! Problems with the run itself (bad arguments, missing directories, output
//! collisions) stop everything before any file is written. Problems with a
//! single image (corrupt file, failed write) skip that image and the batch
//! carries on.
//!
//! ## Deterministic Names
//!
//! Sources are sorted before indices are assigned, so `thumbnail<N>.png`
//! always maps to the same source no matter how the filesystem orders
//! entries or in which order parallel workers finish.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
