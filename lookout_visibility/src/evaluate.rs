// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

use crate::Axis;

/// The binary visibility outcome of an evaluation.
///
/// There is no partially/fully visible distinction; the evaluation is a
/// has-any-chance-of-being-visible test based purely on edge crossing.
///
/// The default is [`Appear`], the state assumed before the first real
/// measurement.
///
/// [`Appear`]: Visibility::Appear
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Visibility {
    /// The element may still be on screen along the evaluated axis.
    #[default]
    Appear,
    /// The element has scrolled past the leading or trailing edge.
    Disappear,
}

impl Visibility {
    /// Returns `true` for [`Visibility::Appear`].
    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Appear)
    }
}

/// Evaluates the visibility of `frame` along `axis`.
///
/// `frame` is the tracked element's rectangle in a caller-chosen coordinate
/// space; `container_bounds`, when present, is the scrollable viewport's
/// rectangle **in that same space**. Negative coordinates are valid and
/// expected as the element scrolls off screen.
///
/// Stated for [`Axis::Horizontal`] (the vertical branch is symmetric over
/// y/height):
///
/// 1. If `frame.max_x() < 0`, the element's trailing edge is before the
///    space's origin: [`Visibility::Disappear`] (scrolled off the leading
///    side).
/// 2. Otherwise, if container bounds are present and
///    `(bounds.width() + frame.width()) - frame.max_x() < 0`, the element's
///    leading edge has moved past the container's trailing edge:
///    [`Visibility::Disappear`] (scrolled off the trailing side). Note the
///    `+ frame.width()` term: the element tolerates being up to one
///    frame-width past the container's edge before this rule fires, which
///    materially delays disappearance for wide elements. That slack is the
///    contract, not an approximation.
/// 3. In every other case, including absent bounds with rule 1 not
///    triggered: [`Visibility::Appear`].
///
/// Without container bounds only rule 1 is meaningful, so trailing-edge
/// disappearance is undetectable.
///
/// The function is total and pure: any inputs, including degenerate
/// zero-sized frames, produce a deterministic answer, and identical inputs
/// always produce identical outputs.
#[must_use]
pub fn evaluate(axis: Axis, frame: Rect, container_bounds: Option<Rect>) -> Visibility {
    let trailing = axis.max_coord(frame);
    if trailing < 0.0 {
        return Visibility::Disappear;
    }
    if let Some(bounds) = container_bounds {
        if (axis.extent(bounds) + axis.extent(frame)) - trailing < 0.0 {
            return Visibility::Disappear;
        }
    }
    Visibility::Appear
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::{Axis, Visibility, evaluate};

    fn frame(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::from_origin_size((x, y), (w, h))
    }

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 300.0, 500.0);

    #[test]
    fn trailing_edge_before_origin_disappears_horizontal() {
        // maxX = -350 < 0, regardless of bounds.
        let f = frame(-450.0, 0.0, 100.0, 200.0);
        assert_eq!(evaluate(Axis::Horizontal, f, None), Visibility::Disappear);
        assert_eq!(
            evaluate(Axis::Horizontal, f, Some(BOUNDS)),
            Visibility::Disappear
        );
    }

    #[test]
    fn trailing_edge_before_origin_disappears_vertical() {
        let f = frame(0.0, -450.0, 200.0, 100.0);
        assert_eq!(evaluate(Axis::Vertical, f, None), Visibility::Disappear);
        assert_eq!(
            evaluate(Axis::Vertical, f, Some(BOUNDS)),
            Visibility::Disappear
        );
    }

    #[test]
    fn absent_bounds_never_detect_trailing_disappearance() {
        // Arbitrarily far past where any container edge could be.
        let f = frame(1_000_000.0, 0.0, 100.0, 200.0);
        assert_eq!(evaluate(Axis::Horizontal, f, None), Visibility::Appear);
    }

    #[test]
    fn element_inside_viewport_appears() {
        // maxX = 150; leading false; remaining = (300 + 100) - 150 = 250 >= 0.
        let f = frame(50.0, 0.0, 100.0, 200.0);
        assert_eq!(evaluate(Axis::Horizontal, f, Some(BOUNDS)), Visibility::Appear);
    }

    #[test]
    fn trailing_rule_tolerates_one_frame_width_of_overshoot() {
        // maxX = 350; remaining = (300 + 100) - 350 = 50 >= 0: still appearing
        // even though the leading edge is 250px inside a 300px viewport's end.
        let f = frame(250.0, 0.0, 100.0, 200.0);
        assert_eq!(evaluate(Axis::Horizontal, f, Some(BOUNDS)), Visibility::Appear);
    }

    #[test]
    fn past_the_tolerance_disappears() {
        // maxX = 410; remaining = 400 - 410 = -10 < 0.
        let f = frame(310.0, 0.0, 100.0, 200.0);
        assert_eq!(
            evaluate(Axis::Horizontal, f, Some(BOUNDS)),
            Visibility::Disappear
        );
    }

    #[test]
    fn trailing_rule_boundary_is_exclusive() {
        // remaining is exactly 0: not yet disappeared.
        let f = frame(300.0, 0.0, 100.0, 200.0);
        assert_eq!(evaluate(Axis::Horizontal, f, Some(BOUNDS)), Visibility::Appear);
    }

    #[test]
    fn leading_rule_boundary_is_exclusive() {
        // maxX is exactly 0: not yet disappeared, and the trailing rule
        // cannot fire this far back.
        let f = frame(-100.0, 0.0, 100.0, 200.0);
        assert_eq!(evaluate(Axis::Horizontal, f, Some(BOUNDS)), Visibility::Appear);
        assert_eq!(evaluate(Axis::Horizontal, f, None), Visibility::Appear);
    }

    #[test]
    fn zero_sized_frame_is_deterministic() {
        let f = frame(10.0, 10.0, 0.0, 0.0);
        assert_eq!(evaluate(Axis::Horizontal, f, Some(BOUNDS)), Visibility::Appear);
        let f = frame(-0.5, 10.0, 0.0, 0.0);
        assert_eq!(
            evaluate(Axis::Horizontal, f, Some(BOUNDS)),
            Visibility::Disappear
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let f = frame(250.0, 0.0, 100.0, 200.0);
        let first = evaluate(Axis::Horizontal, f, Some(BOUNDS));
        for _ in 0..10 {
            assert_eq!(evaluate(Axis::Horizontal, f, Some(BOUNDS)), first);
        }
    }

    #[test]
    fn axes_are_structurally_symmetric() {
        // Swapping every x/width for y/height (and transposing the bounds)
        // must yield the same state on the other axis.
        let cases = [
            (50.0, 100.0),
            (250.0, 100.0),
            (310.0, 100.0),
            (-450.0, 100.0),
            (-100.0, 100.0),
            (0.0, 0.0),
        ];
        let transposed = Rect::new(0.0, 0.0, 500.0, 300.0);
        for (pos, ext) in cases {
            let h = evaluate(Axis::Horizontal, frame(pos, 0.0, ext, 200.0), Some(BOUNDS));
            let v = evaluate(Axis::Vertical, frame(0.0, pos, 200.0, ext), Some(transposed));
            assert_eq!(h, v, "axis mismatch at pos={pos} ext={ext}");
        }
    }

    #[test]
    fn default_visibility_is_appear() {
        assert_eq!(Visibility::default(), Visibility::Appear);
        assert!(Visibility::Appear.is_visible());
        assert!(!Visibility::Disappear.is_visible());
    }
}
