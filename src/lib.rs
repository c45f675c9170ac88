//! StrokeMatch recognizes single-stroke gestures by nearest-template matching.
//!
//! A candidate stroke and every library template are reduced to ten points
//! by index subsampling, normalized into a 200x200 frame, and compared by
//! average point distance. The closest template's label wins, with the
//! earliest template preferred on ties. Template scoring can run in parallel
//! via the `rayon` feature.

pub mod geometry;
pub mod gesture;
pub mod library;
pub mod lowlevel;
pub mod normalize;
pub mod resample;
pub mod score;
pub mod search;
mod trace;
pub mod util;

pub use geometry::{BoundingBox, Point};
pub use gesture::Gesture;
pub use library::{SharedLibrary, Template, TemplateLibrary};
pub use normalize::NormalizeConfig;
pub use search::{geometric_ten_match, recommend, Match, MatchConfig, Matcher};
pub use util::{StrokeMatchError, StrokeMatchResult};
