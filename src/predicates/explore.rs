// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rule-driven exploration over a [`Selection`].
//!
//! Every subset, combination and permutation search is the same depth-first
//! walk: at each node decide whether to prune, record or keep going, then
//! offer the candidate positions from some start index, skipping those a
//! duplicate-suppression rule rejects. A [`Rule`] supplies those decisions;
//! [`ExplorePredicate`] drives them through the engine, one round per level.

use std::fmt::Debug;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::{Counters, Selection};

/// What to do with the node the search has just entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Abandon the branch without recording it.
    Prune,
    /// Record the partial solution and go no deeper.
    Accept,
    /// Record the partial solution, then explore its extensions.
    AcceptAndExpand,
    /// Explore extensions without recording.
    Expand,
}

/// The problem-specific part of a combinatorial search.
pub trait Rule<T>: Debug {
    /// Classify the node for the current partial solution.
    fn visit(&self, selection: &Selection<T>) -> Visit;

    /// First candidate position at this level.
    fn first_candidate(&self, selection: &Selection<T>) -> usize;

    /// Whether `position` must be skipped at this level. `first` is the
    /// value `first_candidate` returned for the level.
    #[allow(unused)]
    fn skip(&self, selection: &Selection<T>, position: usize, first: usize) -> bool {
        false
    }

    /// Amount a pick of `value` takes off the remaining budget.
    #[allow(unused)]
    fn weight(&self, value: &T) -> i64 {
        0
    }
}

/// Drives a [`Rule`] through the engine.
///
/// Round `r` is the node at depth `r`. `try_pred` classifies the node and
/// offers one choice per candidate position; `retry_pred` picks a candidate
/// and descends with `SuccessSamePredicate`. Backtracking undoes the pick.
#[derive(Debug)]
pub struct ExplorePredicate<R> {
    rule: R,
}

impl<R> ExplorePredicate<R> {
    pub fn new(rule: R) -> Self {
        Self { rule }
    }
}

impl<T, R> Predicate<Selection<T>> for ExplorePredicate<R>
where
    T: Clone,
    R: Rule<T>,
{
    fn try_pred(&mut self, ctx: &mut SearchContext<Selection<T>>, _round: usize) -> PredicateResult {
        ctx.statistics.increment(Counters::Nodes);

        match self.rule.visit(&ctx.state) {
            Visit::Prune => {
                ctx.statistics.increment(Counters::Prunes);
                return PredicateResult::Failure;
            }
            Visit::Accept => {
                ctx.state.record();
                ctx.statistics.increment(Counters::Solutions);
                return PredicateResult::Failure;
            }
            Visit::AcceptAndExpand => {
                ctx.state.record();
                ctx.statistics.increment(Counters::Solutions);
            }
            Visit::Expand => {}
        }

        let first = self.rule.first_candidate(&ctx.state);
        match ctx.state.choices().len().saturating_sub(first) {
            0 => PredicateResult::Failure,
            count => PredicateResult::Choices(count),
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext<Selection<T>>,
        _round: usize,
        choice: usize,
    ) -> PredicateResult {
        let first = self.rule.first_candidate(&ctx.state);
        let position = first + choice;
        if self.rule.skip(&ctx.state, position, first) {
            return PredicateResult::Failure;
        }

        let weight = self.rule.weight(&ctx.state.choices()[position]);
        ctx.state.pick(&mut ctx.trail, position, weight);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "Explore"
    }
}
