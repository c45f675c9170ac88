//! Fixed-size index subsampling.
//!
//! Every gesture is reduced to `SAMPLE_COUNT` points picked by index:
//! `floor(k * n / 9)` for `k = 0..=8`, followed by the last point. No
//! interpolation is performed, so short gestures repeat points.

use crate::geometry::Point;
use crate::util::{StrokeMatchError, StrokeMatchResult};

/// Number of points produced by [`ten_sample`].
pub const SAMPLE_COUNT: usize = 10;

/// Returns the source indices picked for a gesture of length `n`.
///
/// `n` must be at least 1; indices are non-decreasing and lie in `0..n`.
pub fn sample_indices(n: usize) -> StrokeMatchResult<[usize; SAMPLE_COUNT]> {
    if n == 0 {
        return Err(StrokeMatchError::EmptyGesture);
    }
    let divisor = SAMPLE_COUNT - 1;
    let mut indices = [0usize; SAMPLE_COUNT];
    for (k, slot) in indices.iter_mut().enumerate().take(divisor) {
        *slot = k * n / divisor;
    }
    indices[divisor] = n - 1;
    Ok(indices)
}

/// Picks ten points from `points` in their original order.
pub fn ten_sample(points: &[Point]) -> StrokeMatchResult<Vec<Point>> {
    let indices = sample_indices(points.len())?;
    Ok(indices.iter().map(|&idx| points[idx]).collect())
}

#[cfg(test)]
mod tests {
    use super::{sample_indices, ten_sample, SAMPLE_COUNT};
    use crate::geometry::Point;
    use crate::util::StrokeMatchError;

    #[test]
    fn indices_follow_ninths() {
        assert_eq!(
            sample_indices(18).unwrap(),
            [0, 2, 4, 6, 8, 10, 12, 14, 16, 17]
        );
        assert_eq!(sample_indices(3).unwrap(), [0, 0, 0, 1, 1, 1, 2, 2, 2, 2]);
        assert_eq!(sample_indices(1).unwrap(), [0; SAMPLE_COUNT]);
    }

    #[test]
    fn indices_stay_in_range() {
        for n in 1..200 {
            let indices = sample_indices(n).unwrap();
            assert!(indices.iter().all(|&i| i < n));
            assert!(indices.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn single_point_repeats() {
        let p = Point::new(5.0, 5.0);
        let out = ten_sample(&[p]).unwrap();
        assert_eq!(out, vec![p; SAMPLE_COUNT]);
    }

    #[test]
    fn keeps_endpoints() {
        let pts: Vec<Point> = (0..37).map(|i| Point::new(i as f64, 0.0)).collect();
        let out = ten_sample(&pts).unwrap();
        assert_eq!(out.len(), SAMPLE_COUNT);
        assert_eq!(out[0], pts[0]);
        assert_eq!(out[SAMPLE_COUNT - 1], pts[36]);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(ten_sample(&[]), Err(StrokeMatchError::EmptyGesture));
    }
}
