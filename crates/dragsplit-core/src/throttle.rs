#![forbid(unsafe_code)]

//! Leading-edge throttle for high-frequency pointer moves.
//!
//! Fast pointer input can deliver far more move samples than the layout can
//! usefully reconcile. [`Throttle`] bounds the rate:
//!
//! - The first sample of a burst is delivered immediately.
//! - Samples arriving within `window` of the last delivery are coalesced,
//!   latest value wins.
//! - The coalesced sample is delivered by [`Throttle::poll`] once the window
//!   has elapsed.
//!
//! This is a throttle, not a debounce: a steady stream of samples is
//! delivered at most once per window rather than postponed until the stream
//! goes quiet.
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use dragsplit_core::throttle::Throttle;
//! use web_time::Instant;
//!
//! let mut throttle = Throttle::new(Duration::from_millis(8));
//! let t0 = Instant::now();
//!
//! assert_eq!(throttle.push(1, t0), Some(1));
//! assert_eq!(throttle.push(2, t0 + Duration::from_millis(2)), None);
//! assert_eq!(throttle.push(3, t0 + Duration::from_millis(4)), None);
//! assert_eq!(throttle.poll(t0 + Duration::from_millis(8)), Some(3));
//! ```

use std::time::Duration;

use web_time::Instant;

/// Default throttle window for pointer moves.
pub const DEFAULT_SAMPLE_TIME: Duration = Duration::from_millis(8);

/// Rate limiter holding at most one pending sample.
///
/// Not thread-safe; drive it from the single event-processing context.
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    window: Duration,
    last_emit: Option<Instant>,
    pending: Option<T>,
}

impl<T> Default for Throttle<T> {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_TIME)
    }
}

impl<T> Throttle<T> {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_emit: None,
            pending: None,
        }
    }

    /// Change the window. Pending state is kept.
    pub fn set_window(&mut self, window: Duration) {
        self.window = window;
    }

    /// Offer a sample.
    ///
    /// Returns `Some(value)` when it should be processed now, `None` when it
    /// was coalesced. A delivered sample supersedes any older pending one.
    pub fn push(&mut self, value: T, now: Instant) -> Option<T> {
        if self.in_window(now) {
            self.pending = Some(value);
            return None;
        }
        self.pending = None;
        self.last_emit = Some(now);
        Some(value)
    }

    /// Deliver the coalesced sample if the window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.is_none() || self.in_window(now) {
            return None;
        }
        self.last_emit = Some(now);
        self.pending.take()
    }

    /// Time at which a pending sample becomes deliverable.
    pub fn deadline(&self) -> Option<Instant> {
        match (&self.pending, self.last_emit) {
            (Some(_), Some(last)) => Some(last + self.window),
            _ => None,
        }
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending sample and start a fresh burst.
    pub fn clear(&mut self) {
        self.pending = None;
        self.last_emit = None;
    }

    fn in_window(&self, now: Instant) -> bool {
        self.last_emit
            .is_some_and(|last| now.saturating_duration_since(last) < self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_2: Duration = Duration::from_millis(2);
    const MS_4: Duration = Duration::from_millis(4);
    const MS_8: Duration = Duration::from_millis(8);
    const MS_20: Duration = Duration::from_millis(20);

    #[test]
    fn first_sample_passes_immediately() {
        let mut throttle = Throttle::new(MS_8);
        let t = Instant::now();
        assert_eq!(throttle.push((1.0, 1.0), t), Some((1.0, 1.0)));
        assert!(!throttle.has_pending());
    }

    #[test]
    fn samples_within_window_coalesce_to_latest() {
        let mut throttle = Throttle::new(MS_8);
        let t = Instant::now();
        throttle.push(1, t);
        assert_eq!(throttle.push(2, t + MS_2), None);
        assert_eq!(throttle.push(3, t + MS_4), None);
        assert!(throttle.has_pending());
        assert_eq!(throttle.deadline(), Some(t + MS_8));

        assert_eq!(throttle.poll(t + MS_4), None);
        assert_eq!(throttle.poll(t + MS_8), Some(3));
        assert_eq!(throttle.poll(t + MS_20), None);
    }

    #[test]
    fn poll_restarts_window() {
        let mut throttle = Throttle::new(MS_8);
        let t = Instant::now();
        throttle.push(1, t);
        throttle.push(2, t + MS_2);
        assert_eq!(throttle.poll(t + MS_8), Some(2));
        assert_eq!(throttle.push(3, t + MS_8 + MS_2), None);
        assert_eq!(throttle.poll(t + MS_8 + MS_8), Some(3));
    }

    #[test]
    fn push_after_window_supersedes_pending() {
        let mut throttle = Throttle::new(MS_8);
        let t = Instant::now();
        throttle.push(1, t);
        throttle.push(2, t + MS_2);
        assert_eq!(throttle.push(3, t + MS_20), Some(3));
        assert!(!throttle.has_pending());
    }

    #[test]
    fn clear_starts_fresh_burst() {
        let mut throttle = Throttle::new(MS_8);
        let t = Instant::now();
        throttle.push(1, t);
        throttle.push(2, t + MS_2);
        throttle.clear();
        assert!(!throttle.has_pending());
        assert_eq!(throttle.deadline(), None);
        assert_eq!(throttle.push(3, t + MS_4), Some(3));
    }

    #[test]
    fn zero_window_never_coalesces() {
        let mut throttle = Throttle::new(Duration::ZERO);
        let t = Instant::now();
        assert_eq!(throttle.push(1, t), Some(1));
        assert_eq!(throttle.push(2, t), Some(2));
    }
}
