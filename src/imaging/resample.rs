//! Neighborhood-average downsampling.
//!
//! Each output pixel is the per-channel mean of a square window of source
//! pixels around its [`SampleGrid`] center. The window half-width is one
//! third of the stride, so it smooths high-frequency detail without reading
//! every source pixel.
//!
//! [`resample`] is a pure function: it only reads the source buffer and
//! returns a freshly allocated one, so it is safe to run on many images in
//! parallel.

use super::calculations::{SampleGrid, sample_grid};
use super::params::Dimensions;
use image::{Rgb, RgbImage};

/// Downsample `source` to exactly `target` pixels.
///
/// `target` is expected to come from
/// [`resolve_target_dimensions`](super::calculations::resolve_target_dimensions),
/// i.e. non-zero and no larger than the source. `source` must have at least
/// one pixel.
pub fn resample(source: &RgbImage, target: Dimensions) -> RgbImage {
    let grid = sample_grid(
        Dimensions::new(source.width(), source.height()),
        target,
    );

    RgbImage::from_fn(target.width, target.height, |tx, ty| {
        let (x, y) = grid.center(tx, ty);
        neighborhood_mean(source, &grid, x, y)
    })
}

/// Mean of the in-bounds source pixels in the window around `(x, y)`.
///
/// Window bounds are truncated toward zero, then clipped to the image.
/// An empty window falls back to the nearest source pixel.
fn neighborhood_mean(source: &RgbImage, grid: &SampleGrid, x: f64, y: f64) -> Rgb<u8> {
    let (pw, ph) = (i64::from(source.width()), i64::from(source.height()));
    let radius = grid.radius();

    let x_lo = ((x - radius) as i64).max(0);
    let x_hi = ((x + radius) as i64).min(pw - 1);
    let y_lo = ((y - radius) as i64).max(0);
    let y_hi = ((y + radius) as i64).min(ph - 1);

    if x_lo > x_hi || y_lo > y_hi {
        return nearest_pixel(source, x, y);
    }

    let mut sum = [0u64; 3];
    for cy in y_lo..=y_hi {
        for cx in x_lo..=x_hi {
            let Rgb(channels) = *source.get_pixel(cx as u32, cy as u32);
            for (acc, c) in sum.iter_mut().zip(channels) {
                *acc += u64::from(c);
            }
        }
    }

    let count = ((x_hi - x_lo + 1) * (y_hi - y_lo + 1)) as u64;
    Rgb(sum.map(|s| (s / count) as u8))
}

fn nearest_pixel(source: &RgbImage, x: f64, y: f64) -> Rgb<u8> {
    let cx = (x.round() as i64).clamp(0, i64::from(source.width()) - 1);
    let cy = (y.round() as i64).clamp(0, i64::from(source.height()) - 1);
    *source.get_pixel(cx as u32, cy as u32)
}
