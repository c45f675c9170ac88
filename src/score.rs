//! Index-aligned average distance.

use crate::geometry::{distance, Point};
use crate::util::{StrokeMatchError, StrokeMatchResult};

/// Mean Euclidean distance between points at matching indices.
///
/// Both slices must have the same length. Two empty slices score zero.
pub fn average_distance(a: &[Point], b: &[Point]) -> StrokeMatchResult<f64> {
    if a.len() != b.len() {
        return Err(StrokeMatchError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Ok(0.0);
    }
    let total: f64 = a.iter().zip(b).map(|(&p, &q)| distance(p, q)).sum();
    Ok(total / a.len() as f64)
}
