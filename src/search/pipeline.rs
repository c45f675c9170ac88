//! Resample-then-normalize preparation shared by all matching entry points.

use crate::geometry::Point;
use crate::normalize::{normalize_with, NormalizeConfig};
use crate::resample::ten_sample;
use crate::score::average_distance;
use crate::util::StrokeMatchResult;

/// Returns a ten-point, normalized copy of `points`.
///
/// The input slice is left untouched.
pub fn prepare(points: &[Point], cfg: &NormalizeConfig) -> StrokeMatchResult<Vec<Point>> {
    let mut sampled = ten_sample(points)?;
    normalize_with(&mut sampled, cfg)?;
    Ok(sampled)
}

/// Average distance between two gestures after preparation with the
/// default frame.
pub fn geometric_ten_match(a: &[Point], b: &[Point]) -> StrokeMatchResult<f64> {
    geometric_ten_match_with(a, b, &NormalizeConfig::default())
}

/// Same as [`geometric_ten_match`] with an explicit normalization config.
pub fn geometric_ten_match_with(
    a: &[Point],
    b: &[Point],
    cfg: &NormalizeConfig,
) -> StrokeMatchResult<f64> {
    let a = prepare(a, cfg)?;
    let b = prepare(b, cfg)?;
    average_distance(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::{geometric_ten_match, prepare};
    use crate::geometry::Point;
    use crate::normalize::NormalizeConfig;
    use crate::resample::SAMPLE_COUNT;
    use crate::util::StrokeMatchError;

    #[test]
    fn prepare_does_not_touch_input() {
        let original = vec![Point::new(10.0, 10.0), Point::new(90.0, 70.0)];
        let copy = original.clone();
        let prepared = prepare(&original, &NormalizeConfig::default()).unwrap();
        assert_eq!(original, copy);
        assert_eq!(prepared.len(), SAMPLE_COUNT);
        assert_eq!(prepared[0], Point::new(0.0, 0.0));
    }

    #[test]
    fn same_shape_at_different_scale_matches_exactly() {
        let small: Vec<Point> = (0..20)
            .map(|i| Point::new(2.0 * i as f64, (i * i) as f64 / 4.0))
            .collect();
        let large: Vec<Point> = small
            .iter()
            .map(|p| p.scale(7.0, 3.0).translate(50.0, -20.0))
            .collect();
        let d = geometric_ten_match(&small, &large).unwrap();
        assert!(d < 1e-9, "distance {d}");
    }

    #[test]
    fn empty_input_is_an_error() {
        let line = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert_eq!(
            geometric_ten_match(&[], &line),
            Err(StrokeMatchError::EmptyGesture)
        );
    }
}
