#![forbid(unsafe_code)]

//! Style maps and pixel-length rendering.
//!
//! A [`StyleMap`] holds the fields it declares itself plus an optional
//! shared base it inherits lookups from. Only declared fields are ever
//! emitted: [`to_pixel_style`] walks the map's own entries and ignores the
//! base entirely, so defaults shared between bars never leak into the styles
//! the host renders.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A single style field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A bare number, rendered as a pixel length.
    Number(f64),
    /// Any other CSS value, passed through untouched.
    Text(String),
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Rendered style: property name to CSS text.
pub type PixelStyle = BTreeMap<String, String>;

/// Style fields with an optional inherited base.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    own: BTreeMap<String, StyleValue>,
    base: Option<Arc<StyleMap>>,
}

impl StyleMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty map that falls back to `base` on lookup.
    #[must_use]
    pub fn inheriting(base: Arc<StyleMap>) -> Self {
        Self {
            own: BTreeMap::new(),
            base: Some(base),
        }
    }

    /// Declare a field on this map.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.own.insert(key.into(), value.into());
    }

    /// Look a field up on this map, then on its base chain.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.own
            .get(key)
            .or_else(|| self.base.as_deref().and_then(|base| base.get(key)))
    }

    /// Whether this map declares `key` itself.
    pub fn has_own(&self, key: &str) -> bool {
        self.own.contains_key(key)
    }

    /// Fields declared on this map, in key order.
    pub fn own_entries(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.own.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Render a style map, turning every number into a pixel length.
///
/// Inherited fields are dropped.
pub fn to_pixel_style(style: &StyleMap) -> PixelStyle {
    style
        .own_entries()
        .map(|(key, value)| {
            let rendered = match value {
                StyleValue::Number(n) => format!("{n}px"),
                StyleValue::Text(text) => text.clone(),
            };
            (key.to_string(), rendered)
        })
        .collect()
}
