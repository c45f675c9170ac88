//! Ranking a candidate stroke against a template library.
//!
//! `pipeline` holds the resample-then-normalize step, `rank` the ordering and
//! Top-K helpers, and `matcher` the `Matcher` front end plus the one-shot
//! [`recommend`] function.

mod matcher;
pub(crate) mod pipeline;
pub(crate) mod rank;

pub use matcher::{recommend, Matcher};
pub use pipeline::{geometric_ten_match, geometric_ten_match_with, prepare};

use crate::normalize::NormalizeConfig;
use crate::util::{StrokeMatchError, StrokeMatchResult};

/// Configuration for [`Matcher`].
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// Frame used to normalize both candidate and templates.
    pub normalize: NormalizeConfig,
    /// Score templates in parallel (requires the `rayon` feature).
    pub parallel: bool,
    /// Reject the best match when its distance exceeds this value.
    pub max_distance: Option<f64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            normalize: NormalizeConfig::default(),
            parallel: false,
            max_distance: None,
        }
    }
}

impl MatchConfig {
    /// Checks every parameter for validity.
    pub fn validate(&self) -> StrokeMatchResult<()> {
        self.normalize.validate()?;
        if let Some(max) = self.max_distance {
            if !max.is_finite() || max < 0.0 {
                return Err(StrokeMatchError::InvalidConfig {
                    reason: "max_distance must be finite and non-negative",
                });
            }
        }
        Ok(())
    }
}

/// A ranked template.
#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    /// Template label.
    pub label: String,
    /// Average point distance to the candidate; lower is closer.
    pub distance: f64,
    /// Position of the template in its library.
    pub index: usize,
}
