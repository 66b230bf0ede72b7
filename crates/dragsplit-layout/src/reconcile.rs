//! Layout reconciler: container geometry and grab bar projection.
//!
//! Grab bars are never stored independently of the panes. After every
//! structural change and every resize the full list is re-derived from the
//! host's pane rectangles, so it is always a pure function of pane geometry
//! and orientation.
//!
//! # Invariants
//!
//! 1. After [`LayoutReconciler::recompute_grab_bars`], exactly
//!    `max(pane_count - 1, 0)` bars exist; bar `i` sits on the far edge of
//!    pane `i`.
//! 2. [`LayoutReconciler::apply_resize`] writes the active axis only.

use std::sync::Arc;

use dragsplit_core::event::BarTarget;
use dragsplit_core::geometry::{Orientation, Rect};
use dragsplit_core::style::{PixelStyle, StyleMap, to_pixel_style};
use serde::{Deserialize, Serialize};

use crate::host::SplitHost;
use crate::track::ResizeCommand;

/// Default grab bar thickness in pixels.
pub const DEFAULT_BAR_THICKNESS: f64 = 8.0;

/// One grab bar, positioned relative to the container origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GrabBar {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl GrabBar {
    /// Derive the bar sitting on the far edge of `pane`.
    ///
    /// Along the axis the bar is `thickness` wide and centered on the pane
    /// edge; across the axis it spans the pane.
    #[must_use]
    pub fn for_pane(
        pane: &Rect,
        container: &Rect,
        orientation: Orientation,
        thickness: f64,
    ) -> Self {
        let offset = orientation.end(pane) - thickness / 2.0 - orientation.origin(container);
        let span = orientation.cross_extent(pane);
        match orientation {
            Orientation::Horizontal => Self {
                left: offset,
                top: 0.0,
                width: thickness,
                height: span,
            },
            Orientation::Vertical => Self {
                left: 0.0,
                top: offset,
                width: span,
                height: thickness,
            },
        }
    }

    /// Inline style for this bar. Class-level fields live on `class` and are
    /// not emitted.
    #[must_use]
    pub fn style(&self, class: Arc<StyleMap>) -> StyleMap {
        StyleMap::inheriting(class)
            .with("left", self.left)
            .with("top", self.top)
            .with("width", self.width)
            .with("height", self.height)
    }

    /// Bounds in page space, given the container's page-space rect.
    #[must_use]
    pub fn page_rect(&self, container: &Rect) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height).translate(container.x, container.y)
    }
}

fn default_bar_class() -> StyleMap {
    StyleMap::new()
        .with("position", "absolute")
        .with("cursor", "grab")
}

/// Owns cached container geometry and the derived grab bar list.
#[derive(Debug, Clone)]
pub struct LayoutReconciler {
    orientation: Orientation,
    bar_thickness: f64,
    container: Rect,
    pane_count: usize,
    grab_bars: Vec<GrabBar>,
    bar_class: Arc<StyleMap>,
}

impl LayoutReconciler {
    #[must_use]
    pub fn new(orientation: Orientation, bar_thickness: f64) -> Self {
        Self {
            orientation,
            bar_thickness,
            container: Rect::default(),
            pane_count: 0,
            grab_bars: Vec::new(),
            bar_class: Arc::new(default_bar_class()),
        }
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Switch axis. Callers must recompute geometry afterwards.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Container rect as of the last [`recompute_container_rect`](Self::recompute_container_rect).
    #[inline]
    pub fn container(&self) -> Rect {
        self.container
    }

    /// Pane count as of the last [`recompute_grab_bars`](Self::recompute_grab_bars).
    #[inline]
    pub fn pane_count(&self) -> usize {
        self.pane_count
    }

    #[inline]
    pub fn grab_bars(&self) -> &[GrabBar] {
        &self.grab_bars
    }

    /// Class-level style shared by every bar.
    pub fn bar_class(&self) -> &StyleMap {
        &self.bar_class
    }

    /// Re-sample the container. Returns `true` when its size changed.
    pub fn recompute_container_rect<H: SplitHost + ?Sized>(&mut self, host: &H) -> bool {
        let next = host.container_rect();
        let resized = next.size_differs(&self.container);
        self.container = next;
        if resized {
            tracing::debug!(
                x = next.x,
                y = next.y,
                width = next.width,
                height = next.height,
                "container resized"
            );
        }
        resized
    }

    /// Re-derive every grab bar from the host's pane rectangles.
    ///
    /// Stops at the first pane the host has no rect for, so bar `i` always
    /// belongs to pane `i`; later bars are missing until the host recovers.
    pub fn recompute_grab_bars<H: SplitHost + ?Sized>(&mut self, host: &H) -> &[GrabBar] {
        let count = host.pane_count();
        self.pane_count = count;
        self.grab_bars.clear();
        for index in 0..count.saturating_sub(1) {
            let Some(pane) = host.pane_rect(index) else {
                tracing::warn!(index, panes = count, "host has no rect for pane; bars truncated");
                break;
            };
            self.grab_bars.push(GrabBar::for_pane(
                &pane,
                &self.container,
                self.orientation,
                self.bar_thickness,
            ));
        }
        tracing::trace!(
            panes = count,
            bars = self.grab_bars.len(),
            orientation = %self.orientation,
            "grab bars recomputed"
        );
        &self.grab_bars
    }

    /// Write a resize onto the pane pair and re-derive the bars.
    ///
    /// Returns `false`, writing nothing, when the pair does not exist.
    pub fn apply_resize<H: SplitHost + ?Sized>(
        &mut self,
        host: &mut H,
        command: &ResizeCommand,
    ) -> bool {
        if command.index + 1 >= host.pane_count() {
            return false;
        }
        let [first, second] = command.sizes;
        host.set_pane_extent(command.index, self.orientation, first);
        host.set_pane_extent(command.index + 1, self.orientation, second);
        self.recompute_grab_bars(host);
        true
    }

    /// Bars rendered as pixel styles, in bar order.
    pub fn grab_bar_styles(&self) -> Vec<PixelStyle> {
        self.grab_bars
            .iter()
            .map(|bar| to_pixel_style(&bar.style(Arc::clone(&self.bar_class))))
            .collect()
    }

    /// Page-space hit target for bar `index`, carrying its `idx` attribute.
    pub fn bar_target(&self, index: usize) -> Option<BarTarget> {
        self.grab_bars
            .get(index)
            .map(|bar| BarTarget::indexed(bar.page_rect(&self.container), index))
    }
}
