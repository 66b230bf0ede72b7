#![forbid(unsafe_code)]

//! dragsplit public facade.
//!
//! Re-exports the types most hosts need from the internal crates and offers a
//! prelude. A host implements [`SplitHost`] over its own pane geometry, builds
//! a [`SplitPanel`], and forwards pointer and structural notifications to it.
//!
//! ```
//! use dragsplit::prelude::*;
//! use web_time::Instant;
//!
//! let host = FlowHost::new(Orientation::Horizontal)
//!     .with_pane(100.0, 50.0)
//!     .with_pane(100.0, 50.0);
//! let mut panel = SplitPanel::new(host, SplitConfig::default())?;
//!
//! let now = Instant::now();
//! let target = panel.bar_target(0).expect("one bar between two panes");
//! panel.handle(PointerInput::Down { target }, now);
//! let dispatch = panel.handle(PointerInput::Move { page_x: 80.0, page_y: 10.0 }, now);
//! assert_eq!(dispatch.resize.map(|r| r.sizes), Some([80.0, 120.0]));
//! # Ok::<(), dragsplit::SplitError>(())
//! ```

// --- Core re-exports -------------------------------------------------------

pub use dragsplit_core::attr::{AttributeSource, BAR_INDEX_ATTRIBUTE, parse_integer_attribute};
pub use dragsplit_core::event::{BarTarget, PointerInput, SplitEvent, SplitEventKind};
pub use dragsplit_core::geometry::{Orientation, ParseOrientationError, Range, Rect};
pub use dragsplit_core::style::{PixelStyle, StyleMap, StyleValue, to_pixel_style};
pub use dragsplit_core::throttle::{DEFAULT_SAMPLE_TIME, Throttle};

// --- Layout re-exports -----------------------------------------------------

pub use dragsplit_layout::{
    Classification, DEFAULT_BAR_THICKNESS, DispatchOutcome, DispatchPhase, DragTrack, FlowHost,
    GestureState, GrabBar, IgnoredReason, LayoutReconciler, Notification, PointerClassifier,
    ResizeCommand, SplitConfig, SplitDispatch, SplitError, SplitHost, SplitLogEntry, SplitPanel,
    fold_step,
};

/// Standard result type for dragsplit configuration.
pub type Result<T> = std::result::Result<T, SplitError>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BarTarget, DispatchOutcome, FlowHost, GestureState, IgnoredReason, Notification,
        Orientation, PointerInput, Rect, Result, SplitConfig, SplitDispatch, SplitError,
        SplitHost, SplitPanel,
    };

    pub use crate::{core, layout};
}

pub use dragsplit_core as core;
pub use dragsplit_layout as layout;
