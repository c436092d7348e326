// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and can be incremented by special predicates,
//! or by additional methods. They are not on the trail, so they count every
//! node the search visited, including those later backtracked over.

use std::fmt;

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::trail::Restore;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Search nodes entered.
    Nodes,
    /// Solutions recorded.
    Solutions,
    /// Branches abandoned by a pruning rule.
    Prunes,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that will increment the given counter, whenever a condition holds (or always).
    pub fn counting_predicate<S>(
        counter: Counters,
        filter: Option<fn(&SearchContext<S>) -> bool>,
    ) -> Box<dyn Predicate<S>>
    where
        S: Restore + 'static,
    {
        Box::new(CountingPredicate {
            filter: filter.unwrap_or(|_ctxt| true),
            counter,
        })
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

struct CountingPredicate<S: Restore> {
    filter: fn(&SearchContext<S>) -> bool,
    counter: Counters,
}

impl<S: Restore> fmt::Debug for CountingPredicate<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountingPredicate")
            .field("counter", &self.counter)
            .finish()
    }
}

impl<S: Restore> Predicate<S> for CountingPredicate<S> {
    fn try_pred(&mut self, ctx: &mut SearchContext<S>, _round: usize) -> PredicateResult {
        if (self.filter)(ctx) {
            ctx.statistics.increment(self.counter);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Counting"
    }
}
