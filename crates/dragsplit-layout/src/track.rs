#![forbid(unsafe_code)]

//! Drag constraint engine.
//!
//! One [`DragTrack`] lives for the duration of one gesture. It is a running
//! fold over accepted pointer positions, seeded with the two adjacent pane
//! sizes at gesture start:
//!
//! ```text
//! diff = previous - p
//! diff > 0 && diff > a   =>  (0, a + b)        // pane 0 fully consumed
//! diff < 0 && -diff > b  =>  (a + b, 0)        // pane 1 fully consumed
//! otherwise              =>  (a - diff, b + diff)
//! ```
//!
//! # Invariants
//!
//! 1. `sizes[0] + sizes[1]` equals its gesture-start value after every step.
//! 2. Neither size is negative after any step, given non-negative seeds.
//! 3. A position outside the legal [`Range`] is dropped: no emission and no
//!    change to the fold state. The gesture resumes on the next in-range
//!    sample. Out-of-range positions are never clamped to the boundary.
//!
//! No rounding is applied; sizes are CSS pixels as `f64`.

use dragsplit_core::geometry::Range;
use serde::{Deserialize, Serialize};

/// New sizes for the pane pair `(index, index + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeCommand {
    /// Bar index; also the index of the first pane of the pair.
    pub index: usize,
    pub sizes: [f64; 2],
}

impl ResizeCommand {
    /// Sum of both sizes.
    #[inline]
    pub fn total(&self) -> f64 {
        self.sizes[0] + self.sizes[1]
    }
}

/// Apply one signed displacement to a size pair.
///
/// `diff` is `previous_position - position`: positive moves toward pane 0.
/// Overshoot saturates: the shrinking pane stops at zero and the other pane
/// absorbs exactly what it had.
#[must_use]
pub fn fold_step(sizes: [f64; 2], diff: f64) -> [f64; 2] {
    let [a, b] = sizes;
    if diff > 0.0 && diff > a {
        [0.0, b + a]
    } else if diff < 0.0 && -diff > b {
        [a + b, 0.0]
    } else {
        [a - diff, b + diff]
    }
}

/// Live state of one in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragTrack {
    bar_index: usize,
    range: Range,
    position: f64,
    sizes: [f64; 2],
    total: f64,
}

impl DragTrack {
    /// Start a track at control point `origin` with the pane pair's current
    /// sizes. The legal range is `[origin - sizes[0], origin + sizes[1]]`.
    #[must_use]
    pub fn start(bar_index: usize, sizes: [f64; 2], origin: f64) -> Self {
        Self::with_range(
            bar_index,
            sizes,
            origin,
            Range::around(origin, sizes[0], sizes[1]),
        )
    }

    /// Start a track with a range sampled elsewhere (the classifier's).
    #[must_use]
    pub fn with_range(bar_index: usize, sizes: [f64; 2], origin: f64, range: Range) -> Self {
        Self {
            bar_index,
            range,
            position: origin,
            sizes,
            total: sizes[0] + sizes[1],
        }
    }

    #[inline]
    pub const fn bar_index(&self) -> usize {
        self.bar_index
    }

    #[inline]
    pub const fn range(&self) -> Range {
        self.range
    }

    /// Last accepted position (the origin before any step).
    #[inline]
    pub const fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    pub const fn sizes(&self) -> [f64; 2] {
        self.sizes
    }

    /// Size sum at gesture start.
    #[inline]
    pub const fn total(&self) -> f64 {
        self.total
    }

    /// Fold one pointer position along the active axis.
    ///
    /// Returns `None`, leaving the track untouched, when `position` is
    /// outside the legal range.
    pub fn step(&mut self, position: f64) -> Option<ResizeCommand> {
        if !self.range.contains(position) {
            return None;
        }
        let diff = self.position - position;
        self.sizes = fold_step(self.sizes, diff);
        self.position = position;
        Some(ResizeCommand {
            index: self.bar_index,
            sizes: self.sizes,
        })
    }
}
