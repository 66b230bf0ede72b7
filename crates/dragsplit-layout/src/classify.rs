#![forbid(unsafe_code)]

//! Pointer event classifier.
//!
//! Turns raw host [`PointerInput`] into exactly one [`SplitEvent`], or a
//! deterministic [`IgnoredReason`]. A pointer-down is the one place where
//! geometry is sampled at gesture start: the bar's control point and the two
//! adjacent pane extents are read from the host and packed into the `Down`
//! event together with the legal drag range.
//!
//! The classifier is stateless; the gesture lifecycle lives in
//! [`crate::controller`].

use dragsplit_core::attr::{BAR_INDEX_ATTRIBUTE, parse_integer_attribute};
use dragsplit_core::event::{BarTarget, PointerInput, SplitEvent};
use dragsplit_core::geometry::{Orientation, Range, Rect};
use serde::{Deserialize, Serialize};

use crate::host::SplitHost;

/// Deterministic reason why an input produced no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredReason {
    /// Pointer-down target has no parsable bar index attribute.
    MissingBarIndex,
    /// Pointer-down bar index has no pane on one side.
    BarIndexOutOfBounds,
    /// The host could not report geometry for an adjacent pane.
    PaneGeometryUnavailable,
    /// Move or up without a gesture in progress.
    NoActiveGesture,
    /// Move sample outside the gesture's legal range; dropped.
    OutsideRange,
    /// Move sample coalesced by the throttle; may be delivered by `tick`.
    Coalesced,
    /// Tick with no coalesced sample due.
    NothingPending,
    /// Pointer left the container; gestures survive it.
    PointerLeave,
    /// The panel is torn down.
    Detached,
    /// Orientation set to its current value.
    OrientationUnchanged,
}

/// Result of classifying one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    Event(SplitEvent),
    Ignored(IgnoredReason),
}

/// Stateless classifier for one orientation and bar thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerClassifier {
    orientation: Orientation,
    bar_thickness: f64,
}

impl PointerClassifier {
    #[must_use]
    pub const fn new(orientation: Orientation, bar_thickness: f64) -> Self {
        Self {
            orientation,
            bar_thickness,
        }
    }

    #[inline]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Classify one raw input against the container's current page rect.
    pub fn classify<H: SplitHost + ?Sized>(
        &self,
        input: &PointerInput,
        container: &Rect,
        host: &H,
    ) -> Classification {
        match input {
            PointerInput::Down { target } => self.classify_down(target, container, host),
            PointerInput::Move { page_x, page_y } => Classification::Event(SplitEvent::Move {
                x: page_x - container.x,
                y: page_y - container.y,
            }),
            PointerInput::Up => Classification::Event(SplitEvent::Up),
            PointerInput::Leave => Classification::Ignored(IgnoredReason::PointerLeave),
        }
    }

    fn classify_down<H: SplitHost + ?Sized>(
        &self,
        target: &BarTarget,
        container: &Rect,
        host: &H,
    ) -> Classification {
        let Some(raw_index) = parse_integer_attribute(target, BAR_INDEX_ATTRIBUTE) else {
            return Classification::Ignored(IgnoredReason::MissingBarIndex);
        };
        let pane_count = host.pane_count();
        let bar_index = match usize::try_from(raw_index) {
            Ok(index) if index < pane_count.saturating_sub(1) => index,
            _ => return Classification::Ignored(IgnoredReason::BarIndexOutOfBounds),
        };
        let (Some(first), Some(second)) = (host.pane_rect(bar_index), host.pane_rect(bar_index + 1))
        else {
            return Classification::Ignored(IgnoredReason::PaneGeometryUnavailable);
        };

        let axis = self.orientation;
        let origin = axis.origin(&target.rect) - axis.origin(container) + self.bar_thickness / 2.0;
        let sizes = [axis.extent(&first), axis.extent(&second)];
        Classification::Event(SplitEvent::Down {
            bar_index,
            origin,
            sizes,
            range: Range::around(origin, sizes[0], sizes[1]),
        })
    }
}
