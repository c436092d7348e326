// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integers in dictionary order.
//!
//! Numbers are built one decimal digit per round; every number reached
//! is recorded on entry, so a number comes before all of its extensions.

use tracing::debug;

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
use crate::predicates::FailPredicate;
use crate::state::Counters;
use crate::trail::{Restore, Trail};

#[derive(Debug)]
struct Numbers {
    limit: u64,
    current: u64,
    results: Vec<u32>,
}

impl Numbers {
    /// Append `digit` to the current number, recording the previous value.
    fn extend(&mut self, trail: &mut Trail<u64>, digit: u64) {
        trail.record_change(self.current);
        self.current = self.current * 10 + digit;
    }
}

impl Restore for Numbers {
    type Change = u64;

    fn restore(&mut self, previous: u64) {
        self.current = previous;
    }
}

#[derive(Debug)]
struct DigitPredicate;

impl Predicate<Numbers> for DigitPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<Numbers>, round: usize) -> PredicateResult {
        ctx.statistics.increment(Counters::Nodes);
        let numbers = &mut ctx.state;
        if round == 0 {
            return PredicateResult::Choices(9);
        }

        // current <= limit <= u32::MAX
        numbers.results.push(numbers.current as u32);
        if numbers.current * 10 > numbers.limit {
            ctx.statistics.increment(Counters::Prunes);
            return PredicateResult::Failure;
        }
        PredicateResult::Choices(10)
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext<Numbers>,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // No leading zero.
        let digit = if round == 0 { choice + 1 } else { choice };
        let digit = digit as u64;
        if ctx.state.current * 10 + digit > ctx.state.limit {
            return PredicateResult::Failure;
        }
        ctx.state.extend(&mut ctx.trail, digit);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "Digit"
    }
}

fn digit_program() -> SearchEngine<Numbers> {
    EngineBuilder::new()
        .add(Box::new(DigitPredicate))
        .terminal(Box::new(FailPredicate))
        .build()
}

/// All integers in `1..=limit`, ordered as their decimal strings would sort.
///
/// ```
/// use backtrack_search::lexical::lexical_order;
///
/// assert_eq!(lexical_order(13), [1, 10, 11, 12, 13, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn lexical_order(limit: u32) -> Vec<u32> {
    if limit == 0 {
        return Vec::new();
    }

    let mut ctx = SearchContext::new(Numbers {
        limit: u64::from(limit),
        current: 0,
        results: Vec::with_capacity(limit as usize),
    });
    let exhausted = digit_program().search(&mut ctx).is_none();
    debug_assert!(exhausted);
    debug!(
        limit,
        nodes = ctx.statistics.get(Counters::Nodes),
        "lexical search finished"
    );

    ctx.into_state().results
}
