// Copyright 2026 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lookout_visibility::Visibility;

/// Edge-triggered deduplicator for visibility states.
///
/// The tracker remembers the last known state and reports only transitions:
/// feeding it the same state repeatedly yields nothing, while a flip in
/// either direction is reported exactly once. There are no transition
/// restrictions; either state may follow either state.
///
/// The initial state is [`Visibility::Appear`], the default assumed before
/// the first real measurement, so an element that starts on screen produces
/// no spurious first report.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VisibilityTracker {
    last: Visibility,
}

impl VisibilityTracker {
    /// Creates a tracker in the initial [`Visibility::Appear`] state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a freshly evaluated state, returning it only on a transition.
    pub fn observe(&mut self, state: Visibility) -> Option<Visibility> {
        if state == self.last {
            None
        } else {
            self.last = state;
            Some(state)
        }
    }

    /// Returns the last known state.
    #[must_use]
    pub fn current(&self) -> Visibility {
        self.last
    }

    /// Resets the tracker to the initial [`Visibility::Appear`] state.
    pub fn reset(&mut self) {
        self.last = Visibility::default();
    }
}
