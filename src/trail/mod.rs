// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking.
//!
//! Every reversible change made during search is recorded on a trail. When
//! the search backtracks, the trail is rewound to an earlier length and the
//! recorded changes are undone in reverse order. This is what gives the
//! engine its push-before-descend / pop-on-return discipline on every exit
//! path, including pruned and suspended branches.
//!
//! The trail itself knows nothing about the state it protects: the state
//! implements [`Restore`] and is handed to [`Trail::rewind_to`].

/// State that can undo a single recorded change.
pub trait Restore {
    /// One reversible change, as recorded on the trail.
    type Change;

    /// Undo `change`.
    ///
    /// Changes are always undone in the reverse order they were recorded,
    /// so an implementation may assume `change` is the most recent change
    /// still in effect.
    fn restore(&mut self, change: Self::Change);
}

/// Stateless programs (engine tests, pure control flow) use `()`.
impl Restore for () {
    type Change = ();

    fn restore(&mut self, _change: ()) {}
}

/// The trail system for O(1) backtracking.
///
/// # Memory Model
///
/// - Each `SearchContext` owns its own trail, so independent searches never
///   share one.
/// - Entries live in a `Vec`, so a checkpoint is just the trail length at
///   the time it was taken. The trail grows with search depth and is
///   limited only by memory.
#[derive(Debug)]
pub struct Trail<C> {
    /// All trail entries recorded so far
    entries: Vec<C>,
}

impl<C> Trail<C> {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(64),
        }
    }

    /// Rewind the trail to length `checkpoint`, undoing every later change
    /// on `state`. Rewinding to a length at or beyond the current one does
    /// nothing.
    pub fn rewind_to<S>(&mut self, checkpoint: usize, state: &mut S)
    where
        S: Restore<Change = C>,
    {
        if checkpoint >= self.entries.len() {
            return;
        }
        for change in self.entries.drain(checkpoint..).rev() {
            state.restore(change);
        }
    }

    /// Record a state change in the trail.
    ///
    /// The caller has already applied the change; `change` must carry enough
    /// to undo it.
    pub fn record_change(&mut self, change: C) {
        self.entries.push(change);
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C> Default for Trail<C> {
    fn default() -> Self {
        Self::new()
    }
}
