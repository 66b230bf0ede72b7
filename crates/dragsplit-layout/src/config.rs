//! Split panel configuration.
//!
//! # Loading
//!
//! ```json
//! { "orientation": "vertical", "sample_time_ms": 16, "bar_thickness": 6.0 }
//! ```
//!
//! Missing fields take their defaults. Environment overrides are read by
//! [`SplitConfig::from_env`]:
//!
//! - `DRAGSPLIT_ORIENTATION`: `horizontal` or `vertical`
//! - `DRAGSPLIT_SAMPLE_TIME_MS`: throttle window in milliseconds
//! - `DRAGSPLIT_BAR_THICKNESS`: grab bar thickness in pixels
//!
//! Unparsable environment values are ignored.

use std::time::Duration;

use dragsplit_core::geometry::Orientation;
use dragsplit_core::throttle::DEFAULT_SAMPLE_TIME;
use serde::{Deserialize, Serialize};

use crate::error::SplitError;
use crate::reconcile::DEFAULT_BAR_THICKNESS;

pub const ENV_ORIENTATION: &str = "DRAGSPLIT_ORIENTATION";
pub const ENV_SAMPLE_TIME_MS: &str = "DRAGSPLIT_SAMPLE_TIME_MS";
pub const ENV_BAR_THICKNESS: &str = "DRAGSPLIT_BAR_THICKNESS";

/// Tunables for one split panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Layout axis.
    pub orientation: Orientation,
    /// Pointer-move throttle window (default 8ms).
    #[serde(rename = "sample_time_ms", with = "duration_ms")]
    pub sample_time: Duration,
    /// Grab bar thickness in pixels (default 8).
    pub bar_thickness: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            sample_time: DEFAULT_SAMPLE_TIME,
            bar_thickness: DEFAULT_BAR_THICKNESS,
        }
    }
}

impl SplitConfig {
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_sample_time(mut self, sample_time: Duration) -> Self {
        self.sample_time = sample_time;
        self
    }

    #[must_use]
    pub fn with_bar_thickness(mut self, bar_thickness: f64) -> Self {
        self.bar_thickness = bar_thickness;
        self
    }

    /// Reject values the panel cannot run with.
    pub fn validate(&self) -> Result<(), SplitError> {
        if self.sample_time.is_zero() {
            return Err(SplitError::ZeroSampleTime);
        }
        if !self.bar_thickness.is_finite() || self.bar_thickness <= 0.0 {
            return Err(SplitError::InvalidBarThickness {
                thickness: self.bar_thickness,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, SplitError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `DRAGSPLIT_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injectable lookup.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = get_env(ENV_ORIENTATION)
            && let Ok(orientation) = val.parse::<Orientation>()
        {
            config.orientation = orientation;
        }

        if let Some(val) = get_env(ENV_SAMPLE_TIME_MS)
            && let Ok(ms) = val.trim().parse::<u64>()
            && ms > 0
        {
            config.sample_time = Duration::from_millis(ms);
        }

        if let Some(val) = get_env(ENV_BAR_THICKNESS)
            && let Ok(px) = val.trim().parse::<f64>()
            && px.is_finite()
            && px > 0.0
        {
            config.bar_thickness = px;
        }

        config
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
