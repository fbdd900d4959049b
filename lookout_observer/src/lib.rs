// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lookout_observer --heading-base-level=0

//! Lookout Observer: stateful viewport-visibility observation.
//!
//! This crate wraps the pure evaluation from `lookout_visibility` with the
//! small amount of state a real visibility callback needs:
//!
//! - [`CoordinateSpace`]: identifies the coordinate space the element's
//!   frame and the container's bounds are measured in, either the
//!   process-global space or a named space scoped to a specific container.
//! - [`VisibilityTracker`]: an edge-triggered deduplicator that remembers
//!   the last known state and reports only transitions.
//! - [`ViewportObserver`]: the attach point for a tracked element. It is
//!   configured once with an axis, a coordinate space, and an `on_change`
//!   callback, then fed a fresh frame (and optionally the container's
//!   bounds) on every layout pass; the callback fires only when the
//!   visibility state flips.
//!
//! Host frameworks own layout and geometry reporting. On each layout pass
//! they query the tracked element's frame in the observer's coordinate
//! space, query the container's bounds in that same space if they can, and
//! call [`ViewportObserver::measure`]. Hosts that cannot query container
//! bounds natively construct the observer with
//! [`ViewportObserver::with_container_size`] and pass the container's size
//! explicitly; a zero size means "bounds unknown", in which case only
//! leading-edge disappearance can be detected.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use lookout_observer::{CoordinateSpace, ViewportObserver};
//! use lookout_visibility::{Axis, Visibility};
//!
//! let mut seen = Vec::new();
//! let mut observer = ViewportObserver::new(
//!     Axis::Horizontal,
//!     CoordinateSpace::named("carousel"),
//!     |state| seen.push(state),
//! );
//!
//! let bounds = Rect::from_origin_size((0.0, 0.0), (300.0, 500.0));
//!
//! // First pass: on screen. The initial state is already `Appear`, so no
//! // transition is reported.
//! observer.measure(Rect::from_origin_size((50.0, 0.0), (100.0, 200.0)), Some(bounds));
//!
//! // Scrolled past the trailing edge: one transition.
//! observer.measure(Rect::from_origin_size((310.0, 0.0), (100.0, 200.0)), Some(bounds));
//!
//! assert_eq!(seen, vec![Visibility::Disappear]);
//! ```
//!
//! ## Caller contract
//!
//! The frame query and the container-bounds query must use the same
//! coordinate space. The observer stores the [`CoordinateSpace`] purely as
//! a pass-through identifier for the binding layer; a mismatch silently
//! produces a meaningless comparison and cannot be detected here.
//!
//! Everything in this crate is synchronous and single-threaded: each
//! `measure` call completes immediately, touches no shared state, and may
//! be driven from whatever context owns layout.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod coordinate_space;
mod observer;
mod tracker;

pub use coordinate_space::CoordinateSpace;
pub use observer::ViewportObserver;
pub use tracker::VisibilityTracker;
