//! Bounding-box normalization into a canonical square.
//!
//! A gesture is moved so its bounding box starts at the origin, then each
//! axis is stretched to `size`. Axes are scaled independently, so aspect
//! ratio is discarded. When one extent is below `degenerate_threshold` the
//! gesture is treated as a straight stroke and only the other axis is
//! stretched; the width check takes precedence over the height check.

use crate::geometry::{bounding_box, Point};
use crate::gesture::{scale, translate};
use crate::util::{StrokeMatchError, StrokeMatchResult};

/// Parameters for [`normalize_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizeConfig {
    /// Side length of the canonical square.
    pub size: f64,
    /// Extent below which an axis is left unscaled.
    pub degenerate_threshold: f64,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            size: 200.0,
            degenerate_threshold: 30.0,
        }
    }
}

impl NormalizeConfig {
    /// Checks that both parameters are finite and in range.
    pub fn validate(&self) -> StrokeMatchResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(StrokeMatchError::InvalidConfig {
                reason: "size must be finite and positive",
            });
        }
        if !self.degenerate_threshold.is_finite() || self.degenerate_threshold < 0.0 {
            return Err(StrokeMatchError::InvalidConfig {
                reason: "degenerate_threshold must be finite and non-negative",
            });
        }
        Ok(())
    }

    /// Returns the `(x, y)` scale factors for a box of the given extents.
    pub(crate) fn scale_factors(&self, width: f64, height: f64) -> (f64, f64) {
        if width < self.degenerate_threshold {
            (1.0, self.size / height)
        } else if height < self.degenerate_threshold {
            (self.size / width, 1.0)
        } else {
            (self.size / width, self.size / height)
        }
    }
}

/// Normalizes `points` in place with the default 200x200 frame.
pub fn normalize(points: &mut [Point]) -> StrokeMatchResult<()> {
    normalize_with(points, &NormalizeConfig::default())
}

/// Normalizes `points` in place using `cfg`.
///
/// The slice is overwritten; callers keep their own copy of the original.
/// NaN or infinite coordinates and overflowing extents are rejected before
/// anything is modified.
pub fn normalize_with(points: &mut [Point], cfg: &NormalizeConfig) -> StrokeMatchResult<()> {
    if points.iter().any(|p| !p.is_finite()) {
        return Err(StrokeMatchError::NonFinite {
            reason: "gesture coordinate",
        });
    }
    let bb = bounding_box(points)?;
    bb.check_finite()?;
    let (sx, sy) = cfg.scale_factors(bb.width(), bb.height());
    translate(points, -bb.min.x, -bb.min.y);
    scale(points, sx, sy);
    Ok(())
}
