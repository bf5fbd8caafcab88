//! Pure calculation functions for thumbnail dimensions and sampling geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use super::params::{Dimensions, SizingPolicy};

/// Resolve the thumbnail size for a source image under a sizing policy.
///
/// The result never exceeds the source on either axis and is never smaller
/// than 1×1. For the aspect-preserving policies the free side is derived
/// from the requested (unclamped) fixed side, then both are clamped.
///
/// # Examples
/// ```
/// # use thumbnailer::imaging::{Dimensions, SizingPolicy, resolve_target_dimensions};
/// // 100x50 at width 50 keeps the 2:1 ratio → 50x25
/// let policy = SizingPolicy::PreserveByWidth { width: 50 };
/// assert_eq!(
///     resolve_target_dimensions(Dimensions::new(100, 50), &policy),
///     Dimensions::new(50, 25)
/// );
/// ```
pub fn resolve_target_dimensions(source: Dimensions, policy: &SizingPolicy) -> Dimensions {
    let (pw, ph) = (u64::from(source.width), u64::from(source.height));

    let (tw, th) = match *policy {
        SizingPolicy::Exact { width, height } => (u64::from(width), u64::from(height)),
        SizingPolicy::PreserveByWidth { width } => {
            let tw = u64::from(width);
            (tw, ph * tw / pw.max(1))
        }
        SizingPolicy::PreserveByHeight { height } => {
            let th = u64::from(height);
            (pw * th / ph.max(1), th)
        }
        SizingPolicy::ScaleFactor { factor } => (
            (pw as f64 / factor) as u64,
            (ph as f64 / factor) as u64,
        ),
    };

    Dimensions {
        width: tw.min(pw).max(1) as u32,
        height: th.min(ph).max(1) as u32,
    }
}

/// Where output pixels land in source space.
///
/// The source is scaled uniformly by `stride` on both axes and the covered
/// span is centered, so unused source margin splits evenly on each side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    /// Source pixels per output pixel, identical on both axes.
    pub stride: f64,
    /// Source extent actually covered: `(tw * stride, th * stride)`.
    pub span: (f64, f64),
    /// Source coordinate of output pixel `(0, 0)`.
    pub origin: (f64, f64),
}

impl SampleGrid {
    /// Source-space center for output pixel `(tx, ty)`.
    pub fn center(&self, tx: u32, ty: u32) -> (f64, f64) {
        (
            self.origin.0 + f64::from(tx) * self.stride,
            self.origin.1 + f64::from(ty) * self.stride,
        )
    }

    /// Half-width of the averaging window around each center.
    pub fn radius(&self) -> f64 {
        self.stride / 3.0
    }
}

/// Compute the uniform scale-and-center mapping from `target` back to `source`.
///
/// The stride is the smaller of the two per-axis shrink factors, so the
/// sampled span fits inside the source on both axes.
///
/// # Examples
/// ```
/// # use thumbnailer::imaging::{Dimensions, sample_grid};
/// // 100x50 into 50x50: width could shrink 2x, height only 1x → stride 1,
/// // a 50-wide span centered with 25px margins left and right.
/// let grid = sample_grid(Dimensions::new(100, 50), Dimensions::new(50, 50));
/// assert_eq!(grid.stride, 1.0);
/// assert_eq!(grid.origin, (25.0, 0.0));
/// ```
pub fn sample_grid(source: Dimensions, target: Dimensions) -> SampleGrid {
    let (pw, ph) = (f64::from(source.width), f64::from(source.height));
    let (tw, th) = (
        f64::from(target.width.max(1)),
        f64::from(target.height.max(1)),
    );

    let w_shrink = pw / tw;
    let h_shrink = ph / th;
    let stride = w_shrink.min(h_shrink);

    let span = (tw * stride, th * stride);
    let origin = ((pw - span.0) / 2.0, (ph - span.1) / 2.0);

    SampleGrid {
        stride,
        span,
        origin,
    }
}
