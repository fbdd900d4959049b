// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lookout_visibility --heading-base-level=0

//! Lookout Visibility: headless axis-scoped viewport-visibility evaluation.
//!
//! This crate decides whether a tracked element is still "visible" inside a
//! scrolling region along a single axis, using nothing but geometry supplied
//! by the caller. It is the decision core behind a lightweight
//! appeared/disappeared callback (marking an ad impression, lazily starting
//! media, and so on) for hosts that do not want a full intersection-observer
//! mechanism.
//!
//! The core concepts are:
//!
//! - [`Axis`]: which coordinate pair (x/width vs y/height) governs the
//!   computation, with small helpers for reading a [`Rect`] along that axis.
//! - [`Visibility`]: the binary [`Appear`]/[`Disappear`] outcome.
//! - [`evaluate`]: a pure function mapping an axis, the element's frame, and
//!   an optional container bounds to a [`Visibility`].
//!
//! This crate deliberately does **not** know about widgets, layout engines,
//! or any particular UI framework. Host frameworks are responsible for:
//!
//! - Producing a fresh frame for the tracked element on every layout pass
//!   (scroll, resize, insertion/removal), in a coordinate space of their
//!   choosing.
//! - Optionally producing the bounds of the scrollable container **in that
//!   same coordinate space**. A mismatched space yields a meaningless (but
//!   never crashing) comparison; there is no way to detect the mismatch at
//!   this layer.
//! - Deduplicating repeated identical states before surfacing them to
//!   application code (see `lookout_observer` for a ready-made tracker).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use lookout_visibility::{Axis, Visibility, evaluate};
//!
//! // A 100x200 element at x=50 inside a 300x500 viewport.
//! let frame = Rect::from_origin_size((50.0, 0.0), (100.0, 200.0));
//! let bounds = Rect::from_origin_size((0.0, 0.0), (300.0, 500.0));
//!
//! assert_eq!(evaluate(Axis::Horizontal, frame, Some(bounds)), Visibility::Appear);
//!
//! // Scrolled well past the leading edge: the trailing edge is behind the origin.
//! let gone = Rect::from_origin_size((-450.0, 0.0), (100.0, 200.0));
//! assert_eq!(evaluate(Axis::Horizontal, gone, Some(bounds)), Visibility::Disappear);
//! ```
//!
//! ## Design notes
//!
//! - The evaluation is edge-based, not overlap-based: it reports whether the
//!   element still has any chance of being on screen, never a visible
//!   fraction or a partial/full distinction.
//! - Only one axis is evaluated at a time, against one edge pair (leading
//!   edge at the space's origin, trailing edge at the container's extent).
//! - When the container bounds are unknown, only leading-edge disappearance
//!   can be detected; the trailing edge never fires.
//! - The trailing-edge rule grants a full frame-extent of slack before it
//!   fires; see [`evaluate`] for the exact policy.
//!
//! [`Appear`]: Visibility::Appear
//! [`Disappear`]: Visibility::Disappear
//! [`Rect`]: kurbo::Rect
//!
//! This crate is `no_std`.

#![no_std]

mod axis;
mod evaluate;

pub use axis::Axis;
pub use evaluate::{Visibility, evaluate};
