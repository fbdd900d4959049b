// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Rect, Size};
use lookout_visibility::{Axis, Visibility, evaluate};

use crate::{CoordinateSpace, VisibilityTracker};

/// Visibility observer attached to a single tracked element.
///
/// The observer is configured once with an axis, a [`CoordinateSpace`], and
/// an `on_change` callback, then fed geometry on every layout pass via
/// [`measure`]. The callback fires only when the visibility state flips; the
/// host's layout cadence decides how often `measure` runs, and rapid passes
/// that never flip the state are silent.
///
/// Two construction paths mirror the two ways hosts can source container
/// bounds:
///
/// - [`new`]: the binding layer queries the container's bounds natively each
///   pass and passes them to [`measure`].
/// - [`with_container_size`]: for hosts without native container-bounds
///   querying, the container's size is supplied up front and synthesized
///   into bounds at the origin whenever [`measure`] receives `None`.
///
/// [`measure`]: ViewportObserver::measure
/// [`new`]: ViewportObserver::new
/// [`with_container_size`]: ViewportObserver::with_container_size
pub struct ViewportObserver<F> {
    axis: Axis,
    coordinate_space: CoordinateSpace,
    container: Option<Size>,
    tracker: VisibilityTracker,
    on_change: F,
}

impl<F> ViewportObserver<F>
where
    F: FnMut(Visibility),
{
    /// Creates an observer whose container bounds are queried natively by
    /// the binding layer and supplied to each [`ViewportObserver::measure`]
    /// call.
    pub fn new(axis: Axis, coordinate_space: CoordinateSpace, on_change: F) -> Self {
        Self {
            axis,
            coordinate_space,
            container: None,
            tracker: VisibilityTracker::new(),
            on_change,
        }
    }

    /// Creates an observer with an explicitly supplied container size, for
    /// hosts that cannot query container bounds natively.
    ///
    /// A [`Size::ZERO`] container is treated as "bounds unknown": only
    /// leading-edge disappearance can then be detected.
    pub fn with_container_size(
        axis: Axis,
        container: Size,
        coordinate_space: CoordinateSpace,
        on_change: F,
    ) -> Self {
        Self {
            axis,
            coordinate_space,
            container: (container != Size::ZERO).then_some(container),
            tracker: VisibilityTracker::new(),
            on_change,
        }
    }

    /// Runs one layout pass.
    ///
    /// `frame` is the tracked element's rectangle, freshly measured in this
    /// observer's coordinate space. `container_bounds` is the scrollable
    /// viewport's rectangle in that same space, if the host can query it;
    /// when `None`, the explicitly configured container size (if any) is
    /// used instead, synthesized as a rectangle at the origin.
    ///
    /// The evaluated state is run through the change tracker: the callback
    /// is invoked, and the state returned, only on a transition.
    pub fn measure(&mut self, frame: Rect, container_bounds: Option<Rect>) -> Option<Visibility> {
        let bounds = container_bounds.or_else(|| self.container.map(Size::to_rect));
        let state = evaluate(self.axis, frame, bounds);
        let transition = self.tracker.observe(state);
        if let Some(state) = transition {
            (self.on_change)(state);
        }
        transition
    }
}

impl<F> ViewportObserver<F> {
    /// Returns the axis this observer evaluates along.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns the coordinate space the binding layer must measure in.
    #[must_use]
    pub fn coordinate_space(&self) -> &CoordinateSpace {
        &self.coordinate_space
    }

    /// Returns the last known visibility state.
    #[must_use]
    pub fn current(&self) -> Visibility {
        self.tracker.current()
    }
}

impl<F> fmt::Debug for ViewportObserver<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportObserver")
            .field("axis", &self.axis)
            .field("coordinate_space", &self.coordinate_space)
            .field("container", &self.container)
            .field("tracker", &self.tracker)
            .finish_non_exhaustive()
    }
}
