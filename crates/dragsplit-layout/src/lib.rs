#![forbid(unsafe_code)]

//! Split-panel layout: drag constraint engine, reconciler, and gesture
//! lifecycle.
//!
//! A split panel lays a sequence of panes out along one axis with a grab bar
//! between every adjacent pair. Dragging bar `i` trades size between panes
//! `i` and `i + 1` only; every other pane keeps its size.
//!
//! The pipeline, leaf first:
//!
//! ```text
//! PointerInput --classify--> SplitEvent --throttle--> DragTrack::step
//!      --ResizeCommand--> LayoutReconciler::apply_resize --> GrabBar list
//! ```
//!
//! [`SplitPanel`] owns the whole pipeline and is the only type most hosts
//! need. Geometry always comes from the injected [`SplitHost`].

pub mod classify;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod reconcile;
pub mod track;

pub use classify::{Classification, IgnoredReason, PointerClassifier};
pub use config::SplitConfig;
pub use controller::{
    DispatchOutcome, DispatchPhase, GestureState, Notification, SplitDispatch, SplitLogEntry,
    SplitPanel,
};
pub use dragsplit_core::event::{BarTarget, PointerInput, SplitEvent, SplitEventKind};
pub use dragsplit_core::geometry::{Orientation, Range, Rect};
pub use dragsplit_core::style::PixelStyle;
pub use error::SplitError;
pub use host::{FlowHost, SplitHost};
pub use reconcile::{DEFAULT_BAR_THICKNESS, GrabBar, LayoutReconciler};
pub use track::{DragTrack, ResizeCommand, fold_step};
