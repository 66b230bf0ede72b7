#![forbid(unsafe_code)]

//! Core: geometry, attributes, styles, and pointer events.
//!
//! # Role in dragsplit
//! `dragsplit-core` is the leaf layer. It owns the numeric types the drag
//! pipeline works in (rectangles, ranges, orientation), the small helpers
//! that turn host attributes and style maps into those types, the canonical
//! pointer event shapes, and the move throttle.
//!
//! # Primary responsibilities
//! - **Geometry**: [`geometry::Rect`], [`geometry::Range`], [`geometry::Orientation`].
//! - **Attributes**: integer-prefix parsing of host element attributes.
//! - **Styles**: numeric style fields rendered as pixel lengths.
//! - **Events**: raw [`event::PointerInput`] and classified [`event::SplitEvent`].
//! - **Throttle**: leading-edge rate limiting for pointer moves.
//!
//! # How it fits in the system
//! `dragsplit-layout` classifies [`event::PointerInput`] into
//! [`event::SplitEvent`] values and folds them into pane resizes. Nothing in
//! this crate samples a display surface; geometry always arrives from the
//! host as plain [`geometry::Rect`] snapshots.

pub mod attr;
pub mod event;
pub mod geometry;
pub mod style;
pub mod throttle;
