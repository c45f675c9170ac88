//! Owned gesture paths.

use crate::geometry::{bounding_box, path_length, BoundingBox, Point};
use crate::util::{StrokeMatchError, StrokeMatchResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Non-empty, order-significant sequence of finite points.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct Gesture {
    points: Vec<Point>,
}

impl Gesture {
    /// Creates a gesture, rejecting an empty point list, NaN or infinite
    /// coordinates, and extents too large to represent.
    pub fn new(points: Vec<Point>) -> StrokeMatchResult<Self> {
        if points.iter().any(|p| !p.is_finite()) {
            return Err(StrokeMatchError::NonFinite {
                reason: "gesture coordinate",
            });
        }
        bounding_box(&points)?.check_finite()?;
        Ok(Self { points })
    }

    /// Builds a gesture from `[x, y]` pairs.
    pub fn from_pairs(pairs: &[[f64; 2]]) -> StrokeMatchResult<Self> {
        Self::new(pairs.iter().copied().map(Point::from).collect())
    }

    /// Returns the points in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of points (always at least one).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total length of the drawn path.
    pub fn path_length(&self) -> f64 {
        path_length(&self.points)
    }

    /// Bounding box of all points.
    pub fn bounding_box(&self) -> BoundingBox {
        bounding_box(&self.points).expect("gesture is non-empty by construction")
    }

    /// Consumes the gesture and returns its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl TryFrom<Vec<Point>> for Gesture {
    type Error = StrokeMatchError;

    fn try_from(points: Vec<Point>) -> StrokeMatchResult<Self> {
        Self::new(points)
    }
}

impl From<Gesture> for Vec<Point> {
    fn from(g: Gesture) -> Self {
        g.points
    }
}

impl AsRef<[Point]> for Gesture {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

/// Offsets every point in place by `(dx, dy)`.
pub fn translate(points: &mut [Point], dx: f64, dy: f64) {
    for p in points.iter_mut() {
        *p = p.translate(dx, dy);
    }
}

/// Multiplies every point's coordinates in place by `(sx, sy)`.
pub fn scale(points: &mut [Point], sx: f64, sy: f64) {
    for p in points.iter_mut() {
        *p = p.scale(sx, sy);
    }
}

#[cfg(test)]
mod tests {
    use super::{scale, translate, Gesture};
    use crate::geometry::Point;
    use crate::util::StrokeMatchError;

    #[test]
    fn gesture_rejects_empty_points() {
        assert_eq!(Gesture::new(Vec::new()), Err(StrokeMatchError::EmptyGesture));
        assert_eq!(Gesture::from_pairs(&[]), Err(StrokeMatchError::EmptyGesture));
    }

    #[test]
    fn gesture_rejects_non_finite_geometry() {
        assert_eq!(
            Gesture::from_pairs(&[[0.0, 0.0], [f64::NAN, 1.0]]),
            Err(StrokeMatchError::NonFinite {
                reason: "gesture coordinate"
            })
        );
        assert!(Gesture::from_pairs(&[[f64::NEG_INFINITY, 0.0]]).is_err());
        assert_eq!(
            Gesture::from_pairs(&[[-1e308, 0.0], [1e308, 0.0]]),
            Err(StrokeMatchError::NonFinite {
                reason: "bounding box extent overflows"
            })
        );
    }

    #[test]
    fn gesture_exposes_path_and_box() {
        let g = Gesture::from_pairs(&[[0.0, 0.0], [0.0, 30.0], [40.0, 30.0]]).unwrap();
        assert_eq!(g.len(), 3);
        assert!(!g.is_empty());
        assert!((g.path_length() - 70.0).abs() < 1e-12);
        let bb = g.bounding_box();
        assert_eq!(bb.max, Point::new(40.0, 30.0));
    }

    #[test]
    fn translate_and_scale_apply_per_axis() {
        let mut pts = vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
        translate(&mut pts, -1.0, -2.0);
        assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(2.0, 2.0)]);
        scale(&mut pts, 10.0, 0.5);
        assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(20.0, 1.0)]);
    }
}
