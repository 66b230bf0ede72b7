#![forbid(unsafe_code)]

//! Geometric primitives in CSS pixel space.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A read-only rectangle snapshot, in floating-point CSS pixels.
///
/// Uses page coordinates (origin at top-left) unless stated otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Same rectangle with its origin shifted by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Whether width or height differ from `other`.
    #[inline]
    pub fn size_differs(&self, other: &Rect) -> bool {
        self.width != other.width || self.height != other.height
    }
}

/// Closed interval `[min, max]` along the active axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Interval reaching `before` below and `after` above `center`.
    #[inline]
    pub fn around(center: f64, before: f64, after: f64) -> Self {
        Self::new(center - before, center + after)
    }

    /// Inclusive membership test. NaN is never contained.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Axis along which panes are laid out and grab bars move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Panes side by side; bars move along x.
    #[default]
    Horizontal,
    /// Panes stacked; bars move along y.
    Vertical,
}

impl Orientation {
    /// The other orientation.
    #[inline]
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Pick the active-axis component of a point.
    #[inline]
    pub const fn coordinate(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Horizontal => x,
            Self::Vertical => y,
        }
    }

    /// Start of `rect` along the active axis.
    #[inline]
    pub const fn origin(self, rect: &Rect) -> f64 {
        match self {
            Self::Horizontal => rect.x,
            Self::Vertical => rect.y,
        }
    }

    /// Size of `rect` along the active axis.
    #[inline]
    pub const fn extent(self, rect: &Rect) -> f64 {
        match self {
            Self::Horizontal => rect.width,
            Self::Vertical => rect.height,
        }
    }

    /// Size of `rect` across the active axis.
    #[inline]
    pub const fn cross_extent(self, rect: &Rect) -> f64 {
        match self {
            Self::Horizontal => rect.height,
            Self::Vertical => rect.width,
        }
    }

    /// End of `rect` along the active axis.
    #[inline]
    pub fn end(self, rect: &Rect) -> f64 {
        match self {
            Self::Horizontal => rect.right(),
            Self::Vertical => rect.bottom(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized orientation name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOrientationError {
    pub input: String,
}

impl fmt::Display for ParseOrientationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown orientation {:?} (expected \"horizontal\" or \"vertical\")",
            self.input
        )
    }
}

impl std::error::Error for ParseOrientationError {}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Self::Horizontal),
            "vertical" | "v" => Ok(Self::Vertical),
            _ => Err(ParseOrientationError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Orientation, Range, Rect};

    #[test]
    fn rect_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect.translate(-10.0, 5.0), Rect::new(0.0, 25.0, 30.0, 40.0));
        assert!(!rect.size_differs(&rect.translate(3.0, 3.0)));
    }

    #[test]
    fn range_is_inclusive() {
        let range = Range::around(100.0, 100.0, 100.0);
        assert_eq!(range, Range::new(0.0, 200.0));
        assert!(range.contains(0.0));
        assert!(range.contains(200.0));
        assert!(!range.contains(200.5));
        assert!(!range.contains(-0.5));
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn orientation_selects_axis() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let h = Orientation::Horizontal;
        let v = Orientation::Vertical;
        assert_eq!(h.coordinate(5.0, 6.0), 5.0);
        assert_eq!(v.coordinate(5.0, 6.0), 6.0);
        assert_eq!(h.origin(&rect), 1.0);
        assert_eq!(v.origin(&rect), 2.0);
        assert_eq!(h.extent(&rect), 3.0);
        assert_eq!(v.extent(&rect), 4.0);
        assert_eq!(h.cross_extent(&rect), 4.0);
        assert_eq!(v.cross_extent(&rect), 3.0);
        assert_eq!(h.end(&rect), 4.0);
        assert_eq!(v.end(&rect), 6.0);
        assert_eq!(h.flipped(), v);
    }

    #[test]
    fn orientation_parses_names() {
        assert_eq!("Vertical".parse::<Orientation>(), Ok(Orientation::Vertical));
        assert_eq!(" h ".parse::<Orientation>(), Ok(Orientation::Horizontal));
        let err = "diagonal".parse::<Orientation>().unwrap_err();
        assert_eq!(err.input, "diagonal");
        assert_eq!(Orientation::Vertical.to_string(), "vertical");
    }
}
