// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

/// The scroll axis a visibility evaluation runs along.
///
/// The axis selects which coordinate pair of a rectangle participates in the
/// computation: x/width for [`Horizontal`], y/height for [`Vertical`]. The
/// two branches are structurally symmetric; swapping every x/width quantity
/// for its y/height counterpart and flipping the axis yields the same result.
///
/// [`Horizontal`]: Axis::Horizontal
/// [`Vertical`]: Axis::Vertical
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Evaluate along x/width (a horizontally scrolling container).
    Horizontal,
    /// Evaluate along y/height (a vertically scrolling container).
    Vertical,
}

impl Axis {
    /// Returns the trailing-edge coordinate of `rect` along this axis.
    ///
    /// This is `rect.max_x()` for [`Axis::Horizontal`] and `rect.max_y()`
    /// for [`Axis::Vertical`].
    #[must_use]
    pub fn max_coord(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.max_x(),
            Self::Vertical => rect.max_y(),
        }
    }

    /// Returns the extent of `rect` along this axis (width or height).
    #[must_use]
    pub fn extent(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.width(),
            Self::Vertical => rect.height(),
        }
    }

    /// Returns the extent of `size` along this axis (width or height).
    #[must_use]
    pub fn size_extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }
}
