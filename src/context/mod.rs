// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining search state, its trail and statistics.
//!
//! Every search owns exactly one `SearchContext`. The state is only ever
//! changed through methods that record the change on the trail, so the
//! engine can restore it on backtrack. Contexts are never shared: two
//! searches over the same input each build their own.

use crate::state::statistics::Statistics;
use crate::trail::{Restore, Trail};

/// Search context: mutable state, the trail that protects it, and counters.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     trail: Trail,            // reversible changes, owned
///     state: S,                // search state, owned (may borrow input)
///     statistics: Statistics,  // counters, never rewound
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext<S: Restore> {
    /// Trail for O(1) backtracking
    pub trail: Trail<S::Change>,
    /// Mutable search state
    pub state: S,
    /// Counters incremented by predicates; survive backtracking
    pub statistics: Statistics,
}

impl<S: Restore> SearchContext<S> {
    /// Create a search context around an initial state.
    pub fn new(state: S) -> Self {
        Self {
            trail: Trail::new(),
            state,
            statistics: Statistics::new(),
        }
    }

    /// Undo every change recorded after `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        self.trail.rewind_to(checkpoint, &mut self.state);
    }

    /// Undo every change recorded so far.
    pub fn rewind_all(&mut self) {
        self.rewind_to(0);
    }

    /// Give back the state, typically to collect its results.
    pub fn into_state(self) -> S {
        self.state
    }
}

impl<S: Restore + Default> Default for SearchContext<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
