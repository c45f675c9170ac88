//! Individual pipeline stages for custom matching flows.
//!
//! Most users should prefer `Matcher` or the top-level `recommend`; these
//! re-exports cover callers that want to run resampling, normalization, or
//! scoring on their own.

pub use crate::geometry::{bounding_box, distance, path_length};
pub use crate::gesture::{scale, translate};
pub use crate::normalize::{normalize, normalize_with};
pub use crate::resample::{sample_indices, ten_sample, SAMPLE_COUNT};
pub use crate::score::average_distance;
pub use crate::search::{geometric_ten_match_with, prepare};
