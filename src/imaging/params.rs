//! Parameter types for thumbnail operations.
//!
//! These types describe *what* size a thumbnail should be, not *how* the
//! pixels get there. They are the interface between the CLI (which parses
//! raw numbers) and the [`calculations`](super::calculations) module (which
//! turns a policy plus a source size into concrete target dimensions).
//!
//! ## Types
//!
//! - [`Dimensions`]: width × height in pixels.
//! - [`SizingPolicy`]: one of four sizing rules, each carrying only the
//!   parameters it uses.
//! - [`SizingError`]: rejected mode or parameter values.

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizingError {
    #[error("PAR must be 0, 1, 2 or 3 (got {0})")]
    UnknownMode(i64),
    #[error("{name} must be positive (got {value})")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Width × height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// How the thumbnail size is derived from the source size.
///
/// Constructed once per run and shared by every image. The numeric mode
/// codes used on the command line are:
///
/// | Code | Variant | Parameters used |
/// |---|---|---|
/// | 0 | [`Exact`](Self::Exact) | width, height |
/// | 1 | [`PreserveByWidth`](Self::PreserveByWidth) | width |
/// | 2 | [`PreserveByHeight`](Self::PreserveByHeight) | height |
/// | 3 | [`ScaleFactor`](Self::ScaleFactor) | width (as a divisor) |
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizingPolicy {
    /// Fixed target box; aspect ratio is not preserved.
    Exact { width: u32, height: u32 },
    /// Fixed width, height follows the source aspect ratio.
    PreserveByWidth { width: u32 },
    /// Fixed height, width follows the source aspect ratio.
    PreserveByHeight { height: u32 },
    /// Both sides divided by `factor`.
    ScaleFactor { factor: f64 },
}

impl SizingPolicy {
    /// Build a policy from the raw `PAR WIDTH HEIGHT` arguments.
    ///
    /// WIDTH is truncated toward zero for every mode except
    /// [`ScaleFactor`](Self::ScaleFactor), where it is the (possibly
    /// fractional) divisor. Arguments a mode does not use are ignored.
    pub fn from_args(par: i64, width: f64, height: i64) -> Result<Self, SizingError> {
        match par {
            0 => Ok(Self::Exact {
                width: positive_width(width)?,
                height: positive_height(height)?,
            }),
            1 => Ok(Self::PreserveByWidth {
                width: positive_width(width)?,
            }),
            2 => Ok(Self::PreserveByHeight {
                height: positive_height(height)?,
            }),
            3 => {
                if !width.is_finite() || width <= 0.0 {
                    return Err(SizingError::InvalidParameter {
                        name: "scale factor",
                        value: width,
                    });
                }
                Ok(Self::ScaleFactor { factor: width })
            }
            other => Err(SizingError::UnknownMode(other)),
        }
    }

    /// Command-line mode code for this policy.
    pub fn code(&self) -> u8 {
        match self {
            Self::Exact { .. } => 0,
            Self::PreserveByWidth { .. } => 1,
            Self::PreserveByHeight { .. } => 2,
            Self::ScaleFactor { .. } => 3,
        }
    }
}

impl fmt::Display for SizingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact { width, height } => write!(f, "exact {width}x{height}"),
            Self::PreserveByWidth { width } => write!(f, "width {width}, keep aspect"),
            Self::PreserveByHeight { height } => write!(f, "height {height}, keep aspect"),
            Self::ScaleFactor { factor } => write!(f, "shrink by {factor}"),
        }
    }
}

fn positive_width(width: f64) -> Result<u32, SizingError> {
    let truncated = width.trunc();
    if !truncated.is_finite() || truncated < 1.0 {
        return Err(SizingError::InvalidParameter {
            name: "WIDTH",
            value: width,
        });
    }
    // Anything past u32::MAX gets clamped to the source size later anyway.
    Ok(truncated.min(u32::MAX as f64) as u32)
}

fn positive_height(height: i64) -> Result<u32, SizingError> {
    if height < 1 {
        return Err(SizingError::InvalidParameter {
            name: "HEIGHT",
            value: height as f64,
        });
    }
    Ok(u32::try_from(height).unwrap_or(u32::MAX))
}
