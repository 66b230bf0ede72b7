#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! Two layers of events flow through dragsplit:
//!
//! - [`PointerInput`]: what the host reports. Coordinates are page
//!   coordinates; a pointer-down carries the grab bar element it hit.
//! - [`SplitEvent`]: what the classifier emits. Exactly one of `Down`,
//!   `Move`, `Up`; coordinates are relative to the container origin, and a
//!   `Down` already carries the geometry sampled at gesture start.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attr::{AttributeSource, BAR_INDEX_ATTRIBUTE};
use crate::geometry::{Range, Rect};

/// The grab bar element a pointer-down landed on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarTarget {
    /// Page-space bounds of the bar element.
    pub rect: Rect,
    /// Element attributes as rendered by the host.
    pub attributes: BTreeMap<String, String>,
}

impl BarTarget {
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            attributes: BTreeMap::new(),
        }
    }

    /// Target carrying an `idx` attribute for `index`.
    #[must_use]
    pub fn indexed(rect: Rect, index: usize) -> Self {
        Self::new(rect).with_attribute(BAR_INDEX_ATTRIBUTE, index.to_string())
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl AttributeSource for BarTarget {
    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.attribute(key)
    }
}

/// Raw pointer notification from the host.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    /// Pointer pressed on a grab bar.
    Down { target: BarTarget },
    /// Pointer moved; page coordinates.
    Move { page_x: f64, page_y: f64 },
    /// Pointer released anywhere in the container.
    Up,
    /// Pointer left the container.
    Leave,
}

/// Classified split event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SplitEvent {
    /// A drag gesture starts on `bar_index`.
    Down {
        bar_index: usize,
        /// Control point along the active axis, container-relative.
        origin: f64,
        /// Active-axis extents of the two adjacent panes at gesture start.
        sizes: [f64; 2],
        /// Legal interval for the control point.
        range: Range,
    },
    /// Pointer position relative to the container origin.
    Move { x: f64, y: f64 },
    /// The gesture ends.
    Up,
}

impl SplitEvent {
    #[must_use]
    pub const fn kind(&self) -> SplitEventKind {
        match self {
            Self::Down { .. } => SplitEventKind::Down,
            Self::Move { .. } => SplitEventKind::Move,
            Self::Up => SplitEventKind::Up,
        }
    }
}

/// Discriminant of [`SplitEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitEventKind {
    Down,
    Move,
    Up,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::parse_integer_attribute;

    #[test]
    fn indexed_target_carries_idx() {
        let target = BarTarget::indexed(Rect::new(96.0, 0.0, 8.0, 100.0), 2);
        assert_eq!(parse_integer_attribute(&target, BAR_INDEX_ATTRIBUTE), Some(2));
    }

    #[test]
    fn event_kind_matches_variant() {
        let down = SplitEvent::Down {
            bar_index: 0,
            origin: 100.0,
            sizes: [100.0, 100.0],
            range: Range::new(0.0, 200.0),
        };
        assert_eq!(down.kind(), SplitEventKind::Down);
        assert_eq!(SplitEvent::Move { x: 1.0, y: 2.0 }.kind(), SplitEventKind::Move);
        assert_eq!(SplitEvent::Up.kind(), SplitEventKind::Up);
    }
}
