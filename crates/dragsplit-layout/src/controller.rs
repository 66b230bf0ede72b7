#![forbid(unsafe_code)]

//! Gesture lifecycle controller.
//!
//! [`SplitPanel`] wires the classifier, move throttle, drag track and layout
//! reconciler into one explicit state machine:
//!
//! ```text
//! Idle --down--> Dragging(i) --up--> Idle
//!                    |
//!                    +--stop (orientation change, teardown)--> Idle
//! ```
//!
//! Every entry point returns a [`SplitDispatch`] describing what happened,
//! including a structured [`SplitLogEntry`]. Nothing returns an error: input
//! that has no effect is reported as [`DispatchOutcome::Ignored`].
//!
//! # Invariants
//!
//! 1. At most one gesture is active; a down while dragging stops the prior
//!    gesture before starting the new one.
//! 2. Only the active track produces resizes, and only through
//!    [`LayoutReconciler::apply_resize`].
//! 3. Ending or stopping a gesture discards any coalesced move sample.
//!
//! # Failure Modes
//!
//! | Condition | Outcome |
//! |---|---|
//! | Move/up/tick while idle | `Ignored(NoActiveGesture)` |
//! | Move outside the legal range | `Ignored(OutsideRange)`, gesture stays active |
//! | Pointer input after `teardown` | `Ignored(Detached)` until `connect` |
//! | Panes change during a gesture | `GestureCanceled` |

use std::time::Duration;

use dragsplit_core::event::{BarTarget, PointerInput, SplitEvent};
use dragsplit_core::geometry::{Orientation, Rect};
use dragsplit_core::style::PixelStyle;
use dragsplit_core::throttle::Throttle;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::classify::{Classification, IgnoredReason, PointerClassifier};
use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::host::SplitHost;
use crate::reconcile::{GrabBar, LayoutReconciler};
use crate::track::{DragTrack, ResizeCommand};

/// Gesture state of a split panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GestureState {
    #[default]
    Idle,
    Dragging { bar_index: usize },
}

/// Host-facing notification raised during a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    /// The container's size changed.
    ContainerResized { width: f64, height: f64 },
    /// The grab bar list was re-derived; re-render it.
    GrabBarsChanged { count: usize },
}

/// Entry point that produced a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchPhase {
    Connect,
    PointerDown,
    PointerMove,
    PointerUp,
    PointerLeave,
    Tick,
    ChildrenChanged,
    HostResized,
    OrientationChanged,
    Teardown,
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchOutcome {
    GestureStarted { bar_index: usize },
    ResizeApplied,
    GestureEnded,
    /// The gesture on `bar_index` was stopped without a final resize.
    GestureCanceled { bar_index: usize },
    /// Geometry re-sampled and bars re-derived.
    Reconciled,
    Disconnected,
    Ignored(IgnoredReason),
}

/// Structured log record for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitLogEntry {
    pub sequence: u64,
    pub phase: DispatchPhase,
    pub from: GestureState,
    pub to: GestureState,
    pub outcome: DispatchOutcome,
}

/// Result of one entry point call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitDispatch {
    /// Classified event consumed by this dispatch, if any.
    pub event: Option<SplitEvent>,
    /// Resize written to the host, if any.
    pub resize: Option<ResizeCommand>,
    pub notifications: Vec<Notification>,
    pub log: SplitLogEntry,
}

impl SplitDispatch {
    #[inline]
    pub fn is_ignored(&self) -> bool {
        matches!(self.log.outcome, DispatchOutcome::Ignored(_))
    }

    /// Reason this dispatch had no effect, if it was ignored.
    pub fn ignored_reason(&self) -> Option<IgnoredReason> {
        match self.log.outcome {
            DispatchOutcome::Ignored(reason) => Some(reason),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveGesture {
    track: DragTrack,
    started_at: Instant,
}

/// Split panel: a row or column of panes with a grab bar between each
/// adjacent pair.
///
/// Single-threaded; drive every entry point from one event context and pass
/// the current time where the throttle needs it.
#[derive(Debug)]
pub struct SplitPanel<H: SplitHost> {
    host: H,
    config: SplitConfig,
    classifier: PointerClassifier,
    reconciler: LayoutReconciler,
    throttle: Throttle<(f64, f64)>,
    active: Option<ActiveGesture>,
    connected: bool,
    next_sequence: u64,
}

impl<H: SplitHost> SplitPanel<H> {
    /// Build a connected panel and take the first geometry sample.
    pub fn new(mut host: H, config: SplitConfig) -> Result<Self, SplitError> {
        config.validate()?;
        host.orientation_changed(config.orientation);
        let mut reconciler = LayoutReconciler::new(config.orientation, config.bar_thickness);
        reconciler.recompute_container_rect(&host);
        reconciler.recompute_grab_bars(&host);
        tracing::debug!(
            orientation = %config.orientation,
            panes = reconciler.pane_count(),
            sample_time_ms = config.sample_time.as_millis() as u64,
            "split panel created"
        );
        Ok(Self {
            host,
            config,
            classifier: PointerClassifier::new(config.orientation, config.bar_thickness),
            reconciler,
            throttle: Throttle::new(config.sample_time),
            active: None,
            connected: true,
            next_sequence: 1,
        })
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access. Call [`children_changed`](Self::children_changed)
    /// or [`host_resized`](Self::host_resized) after changing its layout.
    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    #[inline]
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    pub fn state(&self) -> GestureState {
        match self.active {
            Some(active) => GestureState::Dragging {
                bar_index: active.track.bar_index(),
            },
            None => GestureState::Idle,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_bar(&self) -> Option<usize> {
        self.active.map(|active| active.track.bar_index())
    }

    /// Live track of the active gesture.
    pub fn active_track(&self) -> Option<&DragTrack> {
        self.active.as_ref().map(|active| &active.track)
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    #[inline]
    pub fn grab_bars(&self) -> &[GrabBar] {
        self.reconciler.grab_bars()
    }

    /// Grab bars as pixel style maps, in bar order. Bar `i` must be rendered
    /// with `idx="i"`.
    pub fn grab_bar_styles(&self) -> Vec<PixelStyle> {
        self.reconciler.grab_bar_styles()
    }

    /// Container rect as of the last reconciliation.
    #[inline]
    pub fn container_rect(&self) -> Rect {
        self.reconciler.container()
    }

    /// Page-space hit target for bar `index`.
    pub fn bar_target(&self, index: usize) -> Option<BarTarget> {
        self.reconciler.bar_target(index)
    }

    /// When the coalesced move sample becomes deliverable by [`tick`](Self::tick).
    pub fn next_deadline(&self) -> Option<Instant> {
        self.throttle.deadline()
    }

    /// Route a raw pointer input to its entry point.
    pub fn handle(&mut self, input: PointerInput, now: Instant) -> SplitDispatch {
        match input {
            PointerInput::Down { target } => self.pointer_down(target, now),
            PointerInput::Move { page_x, page_y } => self.pointer_move(page_x, page_y, now),
            PointerInput::Up => self.pointer_up(now),
            PointerInput::Leave => self.pointer_leave(),
        }
    }

    /// Pointer pressed on a grab bar.
    pub fn pointer_down(&mut self, target: BarTarget, now: Instant) -> SplitDispatch {
        let phase = DispatchPhase::PointerDown;
        let _span = tracing::debug_span!("split_dispatch", phase = ?phase).entered();
        let from = self.state();
        if !self.connected {
            return self.ignored(phase, from, None, IgnoredReason::Detached);
        }
        let input = PointerInput::Down { target };
        let container = self.reconciler.container();
        let event = match self.classifier.classify(&input, &container, &self.host) {
            Classification::Event(event) => event,
            Classification::Ignored(reason) => {
                tracing::trace!(?reason, "pointer down ignored");
                return self.ignored(phase, from, None, reason);
            }
        };
        let SplitEvent::Down {
            bar_index,
            origin,
            sizes,
            range,
        } = event
        else {
            return self.ignored(phase, from, Some(event), IgnoredReason::MissingBarIndex);
        };

        if let Some(prior) = self.stop_gesture() {
            tracing::warn!(
                prior_bar = prior,
                bar_index,
                "pointer down while dragging; stopping prior gesture"
            );
        }
        self.active = Some(ActiveGesture {
            track: DragTrack::with_range(bar_index, sizes, origin, range),
            started_at: now,
        });
        tracing::debug!(
            bar_index,
            origin,
            min = range.min,
            max = range.max,
            "gesture started"
        );
        self.finish(
            phase,
            from,
            Some(event),
            None,
            Vec::new(),
            DispatchOutcome::GestureStarted { bar_index },
        )
    }

    /// Pointer moved; page coordinates. Throttled.
    pub fn pointer_move(&mut self, page_x: f64, page_y: f64, now: Instant) -> SplitDispatch {
        let phase = DispatchPhase::PointerMove;
        let _span = tracing::debug_span!("split_dispatch", phase = ?phase).entered();
        let from = self.state();
        if !self.connected {
            return self.ignored(phase, from, None, IgnoredReason::Detached);
        }
        let input = PointerInput::Move { page_x, page_y };
        let container = self.reconciler.container();
        let event = match self.classifier.classify(&input, &container, &self.host) {
            Classification::Event(event) => event,
            Classification::Ignored(reason) => return self.ignored(phase, from, None, reason),
        };
        let SplitEvent::Move { x, y } = event else {
            return self.ignored(phase, from, Some(event), IgnoredReason::NoActiveGesture);
        };
        if self.active.is_none() {
            return self.ignored(phase, from, Some(event), IgnoredReason::NoActiveGesture);
        }
        match self.throttle.push((x, y), now) {
            Some((x, y)) => self.step(phase, from, x, y),
            None => {
                tracing::trace!(x, y, "move coalesced");
                self.ignored(phase, from, Some(event), IgnoredReason::Coalesced)
            }
        }
    }

    /// Deliver a coalesced move sample once its throttle window has elapsed.
    pub fn tick(&mut self, now: Instant) -> SplitDispatch {
        let phase = DispatchPhase::Tick;
        let _span = tracing::debug_span!("split_dispatch", phase = ?phase).entered();
        let from = self.state();
        if !self.connected {
            return self.ignored(phase, from, None, IgnoredReason::Detached);
        }
        if self.active.is_none() {
            return self.ignored(phase, from, None, IgnoredReason::NoActiveGesture);
        }
        match self.throttle.poll(now) {
            Some((x, y)) => self.step(phase, from, x, y),
            None => self.ignored(phase, from, None, IgnoredReason::NothingPending),
        }
    }

    /// Pointer released. Ends the active gesture.
    pub fn pointer_up(&mut self, now: Instant) -> SplitDispatch {
        let phase = DispatchPhase::PointerUp;
        let _span = tracing::debug_span!("split_dispatch", phase = ?phase).entered();
        let from = self.state();
        if !self.connected {
            return self.ignored(phase, from, None, IgnoredReason::Detached);
        }
        let event = Some(SplitEvent::Up);
        let Some(active) = self.active.take() else {
            return self.ignored(phase, from, event, IgnoredReason::NoActiveGesture);
        };
        let discarded = self.throttle.has_pending();
        self.throttle.clear();
        let elapsed_ms = now.saturating_duration_since(active.started_at).as_millis() as u64;
        tracing::debug!(
            bar_index = active.track.bar_index(),
            sizes = ?active.track.sizes(),
            elapsed_ms,
            discarded,
            "gesture ended"
        );
        self.finish(
            phase,
            from,
            event,
            None,
            Vec::new(),
            DispatchOutcome::GestureEnded,
        )
    }

    /// Pointer left the container. Gestures survive it.
    pub fn pointer_leave(&mut self) -> SplitDispatch {
        let phase = DispatchPhase::PointerLeave;
        let _span = tracing::debug_span!("split_dispatch", phase = ?phase).entered();
        let from = self.state();
        let reason = if self.connected {
            IgnoredReason::PointerLeave
        } else {
            IgnoredReason::Detached
        };
        self.ignored(phase, from, None, reason)
    }

    /// Panes were added, removed, or reordered.
    ///
    /// Re-samples the container and re-derives every bar. An active gesture
    /// is stopped: its track was seeded from a pane pair that may no longer
    /// sit at the same index.
    pub fn children_changed(&mut self) -> SplitDispatch {
        let phase = DispatchPhase::ChildrenChanged;
        let _span = tracing::debug_span!("split_dispatch", phase = ?phase).entered();
        let from = self.state();
        if !self.connected {
            return self.ignored(phase, from, None, IgnoredReason::Detached);
        }
        let canceled = self.stop_gesture();
        let notifications = self.reconcile();
        let outcome = match canceled {
            Some(bar_index) => {
                tracing::debug!(bar_index, "panes changed mid-gesture; gesture stopped");
                DispatchOutcome::GestureCanceled { bar_index }
            }
            None => DispatchOutcome::Reconciled,
        };
        self.finish(phase, from, None, None, notifications, outcome)
    }

    /// The container was resized by its surroundings.
    pub fn host_resized(&mut self) -> SplitDispatch {
        let phase = DispatchPhase::HostResized;
        let _span = tracing::debug_span!("split_dispatch", phase = ?phase).entered();
        let from = self.state();
        if !self.connected {
            return self.ignored(phase, from, None, IgnoredReason::Detached);
        }
        let notifications = self.reconcile();
        self.finish(
            phase,
            from,
            None,
            None,
            notifications,
            DispatchOutcome::Reconciled,
        )
    }

    /// Switch axis.
    ///
    /// Stops any gesture, clears the throttle, tells the host, then
    /// re-samples the container and re-derives every bar. This also runs
    /// while detached so the bars never lag the orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) -> SplitDispatch {
        let phase = DispatchPhase::OrientationChanged;
        let _span = tracing::debug_span!("split_dispatch", phase = ?phase).entered();
        let from = self.state();
        if orientation == self.config.orientation {
            return self.ignored(phase, from, None, IgnoredReason::OrientationUnchanged);
        }
        let canceled = self.stop_gesture();
        self.config.orientation = orientation;
        self.classifier.set_orientation(orientation);
        self.reconciler.set_orientation(orientation);
        self.host.orientation_changed(orientation);
        tracing::debug!(%orientation, connected = self.connected, "orientation changed");
        let notifications = self.reconcile();
        let outcome = match canceled {
            Some(bar_index) => DispatchOutcome::GestureCanceled { bar_index },
            None => DispatchOutcome::Reconciled,
        };
        self.finish(phase, from, None, None, notifications, outcome)
    }

    /// Change the move throttle window. Pending samples are kept.
    pub fn set_sample_time(&mut self, sample_time: Duration) -> Result<(), SplitError> {
        let next = self.config.with_sample_time(sample_time);
        next.validate()?;
        self.config = next;
        self.throttle.set_window(sample_time);
        Ok(())
    }

    /// Detach from the host: stop any gesture and ignore input until
    /// [`connect`](Self::connect).
    pub fn teardown(&mut self) -> SplitDispatch {
        let phase = DispatchPhase::Teardown;
        let _span = tracing::debug_span!("split_dispatch", phase = ?phase).entered();
        let from = self.state();
        if !self.connected {
            return self.ignored(phase, from, None, IgnoredReason::Detached);
        }
        let canceled = self.stop_gesture();
        self.connected = false;
        tracing::debug!(canceled = ?canceled, "split panel detached");
        let outcome = match canceled {
            Some(bar_index) => DispatchOutcome::GestureCanceled { bar_index },
            None => DispatchOutcome::Disconnected,
        };
        self.finish(phase, from, None, None, Vec::new(), outcome)
    }

    /// Re-attach after [`teardown`](Self::teardown) and take a fresh geometry
    /// sample. Also usable on a connected panel to force reconciliation.
    pub fn connect(&mut self) -> SplitDispatch {
        let phase = DispatchPhase::Connect;
        let _span = tracing::debug_span!("split_dispatch", phase = ?phase).entered();
        let from = self.state();
        self.connected = true;
        let notifications = self.reconcile();
        self.finish(
            phase,
            from,
            None,
            None,
            notifications,
            DispatchOutcome::Reconciled,
        )
    }

    fn step(&mut self, phase: DispatchPhase, from: GestureState, x: f64, y: f64) -> SplitDispatch {
        let event = Some(SplitEvent::Move { x, y });
        let position = self.config.orientation.coordinate(x, y);
        let Some(active) = self.active.as_mut() else {
            return self.ignored(phase, from, event, IgnoredReason::NoActiveGesture);
        };
        let Some(command) = active.track.step(position) else {
            let range = active.track.range();
            tracing::trace!(position, min = range.min, max = range.max, "sample outside range");
            return self.ignored(phase, from, event, IgnoredReason::OutsideRange);
        };
        if !self.reconciler.apply_resize(&mut self.host, &command) {
            self.stop_gesture();
            tracing::warn!(
                bar_index = command.index,
                panes = self.host.pane_count(),
                "pane pair vanished mid-gesture; gesture stopped"
            );
            return self.finish(
                phase,
                from,
                event,
                None,
                Vec::new(),
                DispatchOutcome::GestureCanceled {
                    bar_index: command.index,
                },
            );
        }
        tracing::debug!(
            bar_index = command.index,
            first = command.sizes[0],
            second = command.sizes[1],
            "resize applied"
        );
        let notifications = vec![Notification::GrabBarsChanged {
            count: self.reconciler.grab_bars().len(),
        }];
        self.finish(
            phase,
            from,
            event,
            Some(command),
            notifications,
            DispatchOutcome::ResizeApplied,
        )
    }

    /// Force the active gesture to end without a resize. Returns its bar.
    fn stop_gesture(&mut self) -> Option<usize> {
        self.throttle.clear();
        self.active.take().map(|active| active.track.bar_index())
    }

    fn reconcile(&mut self) -> Vec<Notification> {
        let mut notifications = Vec::with_capacity(2);
        if self.reconciler.recompute_container_rect(&self.host) {
            let rect = self.reconciler.container();
            notifications.push(Notification::ContainerResized {
                width: rect.width,
                height: rect.height,
            });
        }
        let count = self.reconciler.recompute_grab_bars(&self.host).len();
        notifications.push(Notification::GrabBarsChanged { count });
        notifications
    }

    fn ignored(
        &mut self,
        phase: DispatchPhase,
        from: GestureState,
        event: Option<SplitEvent>,
        reason: IgnoredReason,
    ) -> SplitDispatch {
        self.finish(
            phase,
            from,
            event,
            None,
            Vec::new(),
            DispatchOutcome::Ignored(reason),
        )
    }

    fn finish(
        &mut self,
        phase: DispatchPhase,
        from: GestureState,
        event: Option<SplitEvent>,
        resize: Option<ResizeCommand>,
        notifications: Vec<Notification>,
        outcome: DispatchOutcome,
    ) -> SplitDispatch {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        SplitDispatch {
            event,
            resize,
            notifications,
            log: SplitLogEntry {
                sequence,
                phase,
                from,
                to: self.state(),
                outcome,
            },
        }
    }
}
