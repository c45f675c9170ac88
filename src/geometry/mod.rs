//! Planar geometry primitives.
//!
//! `Point` is a plain value type with named coordinates. Path length and
//! bounding boxes are derived from point slices on demand and never cached.

use crate::util::{StrokeMatchError, StrokeMatchResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in the drawing plane.
///
/// With the `serde` feature a point encodes as a `[x, y]` pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point offset by `(dx, dy)`.
    #[inline]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns this point with each axis multiplied by its scale factor.
    #[inline]
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        Self::new(self.x * sx, self.y * sy)
    }

    /// Returns `true` when both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Axis-aligned bounding box with `min <= max` on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Corner with the smallest coordinates.
    pub min: Point,
    /// Corner with the largest coordinates.
    pub max: Point,
}

impl BoundingBox {
    /// Horizontal extent, floored at 1.
    ///
    /// The floor keeps scale factors finite for perfectly vertical strokes.
    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(1.0)
    }

    /// Vertical extent, floored at 1.
    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(1.0)
    }

    /// Checks that both extents are representable.
    ///
    /// Finite corners can still overflow, e.g. `-1e308..1e308`.
    pub fn check_finite(&self) -> StrokeMatchResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(StrokeMatchError::NonFinite {
                reason: "bounding box corner",
            });
        }
        if !(self.max.x - self.min.x).is_finite() || !(self.max.y - self.min.y).is_finite() {
            return Err(StrokeMatchError::NonFinite {
                reason: "bounding box extent overflows",
            });
        }
        Ok(())
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Sum of distances between consecutive points; zero for fewer than two.
pub fn path_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| distance(pair[0], pair[1]))
        .sum()
}

/// Computes the component-wise bounding box of a non-empty point slice.
pub fn bounding_box(points: &[Point]) -> StrokeMatchResult<BoundingBox> {
    let (first, rest) = points.split_first().ok_or(StrokeMatchError::EmptyGesture)?;
    let mut min = *first;
    let mut max = *first;
    for p in rest {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Ok(BoundingBox { min, max })
}
