//! Host boundary.
//!
//! The split panel never touches a display surface directly. Everything it
//! knows about geometry comes through [`SplitHost`], and the only write it
//! performs is setting one pane's size along the active axis.

use dragsplit_core::geometry::{Orientation, Rect};

/// Geometry accessor and pane-size sink provided by the rendering layer.
pub trait SplitHost {
    /// Current page-space bounds of the container.
    fn container_rect(&self) -> Rect;

    /// Number of panes currently slotted into the container.
    fn pane_count(&self) -> usize;

    /// Current page-space bounds of pane `index`, if it exists.
    fn pane_rect(&self, index: usize) -> Option<Rect>;

    /// Set pane `index`'s size along `orientation`'s axis, leaving the cross
    /// axis untouched.
    fn set_pane_extent(&mut self, index: usize, orientation: Orientation, size: f64);

    /// The panel switched orientation. Hosts that lay panes out themselves
    /// should re-flow before the panel re-samples geometry.
    fn orientation_changed(&mut self, _orientation: Orientation) {}
}

impl<H: SplitHost + ?Sized> SplitHost for Box<H> {
    fn container_rect(&self) -> Rect {
        (**self).container_rect()
    }

    fn pane_count(&self) -> usize {
        (**self).pane_count()
    }

    fn pane_rect(&self, index: usize) -> Option<Rect> {
        (**self).pane_rect(index)
    }

    fn set_pane_extent(&mut self, index: usize, orientation: Orientation, size: f64) {
        (**self).set_pane_extent(index, orientation, size);
    }

    fn orientation_changed(&mut self, orientation: Orientation) {
        (**self).orientation_changed(orientation);
    }
}

/// In-memory host that flows panes in a single row or column.
///
/// Horizontal flow places panes left to right, top-aligned; vertical flow
/// stacks them top to bottom, left-aligned. The container shrink-wraps its
/// panes. Useful for headless hosts, tests, and benches.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowHost {
    x: f64,
    y: f64,
    orientation: Orientation,
    panes: Vec<(f64, f64)>,
}

impl FlowHost {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            orientation,
            panes: Vec::new(),
        }
    }

    /// Place the container's top-left corner at `(x, y)` in page space.
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Append a pane of the given size.
    #[must_use]
    pub fn with_pane(mut self, width: f64, height: f64) -> Self {
        self.panes.push((width, height));
        self
    }

    pub fn push_pane(&mut self, width: f64, height: f64) {
        self.panes.push((width, height));
    }

    /// Insert a pane at `index`, clamped to the end.
    pub fn insert_pane(&mut self, index: usize, width: f64, height: f64) {
        let index = index.min(self.panes.len());
        self.panes.insert(index, (width, height));
    }

    /// Remove pane `index`, returning its `(width, height)`.
    pub fn remove_pane(&mut self, index: usize) -> Option<(f64, f64)> {
        (index < self.panes.len()).then(|| self.panes.remove(index))
    }

    /// Move the container in page space.
    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// `(width, height)` of pane `index`.
    pub fn pane_size(&self, index: usize) -> Option<(f64, f64)> {
        self.panes.get(index).copied()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl SplitHost for FlowHost {
    fn container_rect(&self) -> Rect {
        let (width, height): (f64, f64) = match self.orientation {
            Orientation::Horizontal => (
                self.panes.iter().map(|p| p.0).sum(),
                self.panes.iter().map(|p| p.1).fold(0.0, f64::max),
            ),
            Orientation::Vertical => (
                self.panes.iter().map(|p| p.0).fold(0.0, f64::max),
                self.panes.iter().map(|p| p.1).sum(),
            ),
        };
        Rect::new(self.x, self.y, width, height)
    }

    fn pane_count(&self) -> usize {
        self.panes.len()
    }

    fn pane_rect(&self, index: usize) -> Option<Rect> {
        let &(width, height) = self.panes.get(index)?;
        let rect = match self.orientation {
            Orientation::Horizontal => {
                let offset: f64 = self.panes[..index].iter().map(|p| p.0).sum();
                Rect::new(self.x + offset, self.y, width, height)
            }
            Orientation::Vertical => {
                let offset: f64 = self.panes[..index].iter().map(|p| p.1).sum();
                Rect::new(self.x, self.y + offset, width, height)
            }
        };
        Some(rect)
    }

    fn set_pane_extent(&mut self, index: usize, orientation: Orientation, size: f64) {
        if let Some(pane) = self.panes.get_mut(index) {
            match orientation {
                Orientation::Horizontal => pane.0 = size,
                Orientation::Vertical => pane.1 = size,
            }
        }
    }

    fn orientation_changed(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> FlowHost {
        FlowHost::new(Orientation::Horizontal)
            .at(10.0, 20.0)
            .with_pane(100.0, 50.0)
            .with_pane(60.0, 80.0)
            .with_pane(40.0, 50.0)
    }

    #[test]
    fn horizontal_flow_places_panes_in_a_row() {
        let host = three();
        assert_eq!(host.container_rect(), Rect::new(10.0, 20.0, 200.0, 80.0));
        assert_eq!(host.pane_rect(1), Some(Rect::new(110.0, 20.0, 60.0, 80.0)));
        assert_eq!(host.pane_rect(2), Some(Rect::new(170.0, 20.0, 40.0, 50.0)));
        assert_eq!(host.pane_rect(3), None);
    }

    #[test]
    fn vertical_flow_stacks_panes() {
        let mut host = three();
        host.orientation_changed(Orientation::Vertical);
        assert_eq!(host.container_rect(), Rect::new(10.0, 20.0, 100.0, 180.0));
        assert_eq!(host.pane_rect(2), Some(Rect::new(10.0, 150.0, 40.0, 50.0)));
    }

    #[test]
    fn set_extent_touches_one_axis() {
        let mut host = three();
        host.set_pane_extent(0, Orientation::Horizontal, 75.0);
        assert_eq!(host.pane_size(0), Some((75.0, 50.0)));
        host.set_pane_extent(0, Orientation::Vertical, 10.0);
        assert_eq!(host.pane_size(0), Some((75.0, 10.0)));
        host.set_pane_extent(9, Orientation::Vertical, 10.0);
        assert_eq!(host.pane_count(), 3);
    }

    #[test]
    fn insert_and_remove() {
        let mut host = three();
        host.insert_pane(99, 5.0, 5.0);
        assert_eq!(host.pane_count(), 4);
        assert_eq!(host.remove_pane(0), Some((100.0, 50.0)));
        assert_eq!(host.remove_pane(10), None);
        assert_eq!(host.pane_rect(0), Some(Rect::new(10.0, 20.0, 60.0, 80.0)));
    }

    #[test]
    fn empty_host_has_empty_container() {
        let host = FlowHost::new(Orientation::Vertical);
        assert_eq!(host.container_rect(), Rect::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(host.pane_count(), 0);
    }
}
