//! Configuration errors.
//!
//! Pointer and structural input never fails: abnormal input is reported as
//! an [`IgnoredReason`](crate::classify::IgnoredReason) in the dispatch log.
//! [`SplitError`] only covers building and loading a
//! [`SplitConfig`](crate::config::SplitConfig).

use std::fmt;

#[derive(Debug)]
pub enum SplitError {
    /// The move throttle window must be non-zero.
    ZeroSampleTime,
    /// Bar thickness must be finite and positive.
    InvalidBarThickness { thickness: f64 },
    /// Config document failed to parse.
    Json(serde_json::Error),
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSampleTime => write!(f, "sample time must be greater than zero"),
            Self::InvalidBarThickness { thickness } => {
                write!(f, "bar thickness must be finite and positive, got {thickness}")
            }
            Self::Json(err) => write!(f, "invalid split config: {err}"),
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::ZeroSampleTime | Self::InvalidBarThickness { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
