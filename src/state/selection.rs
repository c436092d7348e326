// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Selection state for subset, combination and permutation search.
//!
//! The partial solution is kept as a stack of positions into the choice set
//! rather than as values, so duplicate-suppression rules can look at
//! neighbouring positions and the used markers. Every pick is recorded on
//! the trail; undoing it pops the position, clears its used marker and
//! gives back its weight.

use crate::trail::{Restore, Trail};

/// One pick on the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    pub position: usize,
    pub weight: i64,
}

#[derive(Debug, Clone)]
pub struct Selection<T> {
    /// The choice set. Never changes after construction.
    choices: Vec<T>,
    /// Positions picked along the current path, in order.
    path: Vec<usize>,
    /// Used marker per position.
    used: Vec<bool>,
    /// Budget left for sum searches; untouched by zero-weight picks.
    remaining: i64,
    /// Snapshots of accepted paths, in discovery order.
    results: Vec<Vec<T>>,
}

impl<T> Selection<T> {
    pub fn new(choices: Vec<T>) -> Self {
        Self::with_target(choices, 0)
    }

    /// A selection whose picks are charged against `target`.
    pub fn with_target(choices: Vec<T>, target: i64) -> Self {
        let used = vec![false; choices.len()];
        Self {
            choices,
            path: Vec::new(),
            used,
            remaining: target,
            results: Vec::new(),
        }
    }

    pub fn choices(&self) -> &[T] {
        &self.choices
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Length of the partial solution.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn last_position(&self) -> Option<usize> {
        self.path.last().copied()
    }

    pub fn is_used(&self, position: usize) -> bool {
        self.used[position]
    }

    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Append `choices[position]` to the partial solution.
    pub fn pick(&mut self, trail: &mut Trail<Pick>, position: usize, weight: i64) {
        self.path.push(position);
        self.used[position] = true;
        self.remaining -= weight;
        trail.record_change(Pick { position, weight });
    }

    pub fn results(&self) -> &[Vec<T>] {
        &self.results
    }

    pub fn into_results(self) -> Vec<Vec<T>> {
        self.results
    }
}

impl<T: Clone> Selection<T> {
    /// An independent copy of the partial solution, as values.
    pub fn snapshot(&self) -> Vec<T> {
        self.path
            .iter()
            .map(|&position| self.choices[position].clone())
            .collect()
    }

    /// Record the current partial solution as a result.
    pub fn record(&mut self) {
        let snapshot = self.snapshot();
        self.results.push(snapshot);
    }
}

impl<T> Restore for Selection<T> {
    type Change = Pick;

    fn restore(&mut self, pick: Pick) {
        let popped = self.path.pop();
        debug_assert_eq!(popped, Some(pick.position), "picks undone out of order");
        self.used[pick.position] = false;
        self.remaining += pick.weight;
    }
}
