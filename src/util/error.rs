//! Error types for strokematch.

use thiserror::Error;

/// Result alias for strokematch operations.
pub type StrokeMatchResult<T> = std::result::Result<T, StrokeMatchError>;

/// Errors that can occur when preparing or matching gestures.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StrokeMatchError {
    /// A gesture with zero points was passed where at least one is required.
    #[error("gesture has no points")]
    EmptyGesture,
    /// A template library with zero templates was supplied.
    #[error("template library is empty")]
    EmptyLibrary,
    /// Two point sequences that must be index-aligned have different lengths.
    #[error("point sequences differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    /// A coordinate or bounding-box extent is NaN or infinite.
    #[error("non-finite geometry: {reason}")]
    NonFinite { reason: &'static str },
    /// A template label occurs more than once in a library.
    #[error("duplicate template label: {label}")]
    DuplicateLabel { label: String },
    /// A configuration value is outside its valid range.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}
