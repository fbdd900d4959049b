// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Identifies the coordinate space geometry queries are measured in.
///
/// This is a pass-through identifier with no computation of its own. The
/// binding layer uses it for both the tracked element's frame query and the
/// container's bounds query; the two must match for the comparison to be
/// meaningful. The default is [`Global`].
///
/// [`Global`]: CoordinateSpace::Global
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CoordinateSpace {
    /// The process-global coordinate space.
    #[default]
    Global,
    /// A caller-chosen label scoped to a specific container.
    ///
    /// The same label must also be applied to the ancestor container so the
    /// frame and bounds are measured consistently.
    Named(String),
}

impl CoordinateSpace {
    /// Creates a named coordinate space from a label.
    pub fn named(label: impl Into<String>) -> Self {
        Self::Named(label.into())
    }

    /// Returns the label of a named space, or `None` for the global space.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Global => None,
            Self::Named(label) => Some(label),
        }
    }
}
