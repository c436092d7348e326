// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Test predicates for validating the search engine.
//!
//! These predicates are simple examples that demonstrate how the engine works
//! without the complexity of a real search. They're useful for:
//! - Testing the engine's backtracking logic
//! - Validating trail integration
//! - Providing examples for implementing real predicates
//!
//! # Execution Model
//!
//! These predicates follow the WAM-like execution model:
//! - `try_pred(round)` is called first and can return Choices(n)
//! - Engine then calls `retry_pred(round, choice)` for choice in 0..n
//! - Searches succeed via side effects, then Suspend or Fail to terminate

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::trail::{Restore, Trail};

/// A stack of assigned integers plus every complete assignment recorded.
#[derive(Debug, Default)]
pub struct Assignment {
    /// Current assignment; trailed.
    pub values: Vec<i32>,
    /// Snapshots taken by `RecordPredicate`; not trailed.
    pub solutions: Vec<Vec<i32>>,
}

impl Assignment {
    pub fn assign(&mut self, trail: &mut Trail<i32>, value: i32) {
        self.values.push(value);
        trail.record_change(value);
    }
}

impl Restore for Assignment {
    type Change = i32;

    fn restore(&mut self, _value: i32) {
        self.values.pop();
    }
}

/// Predicate that tries integers in a range using the Choices model.
///
/// This demonstrates the choice mechanism:
/// - try_pred returns Choices(n) where n is the range size
/// - retry_pred(round, choice) assigns `start + choice`
///
/// # Example
///
/// ```
/// use backtrack_search::engine::EngineBuilder;
/// use backtrack_search::predicates::SuspendPredicate;
/// use backtrack_search::predicates::test::{Assignment, IntegerRangePredicate};
/// use backtrack_search::context::SearchContext;
///
/// let mut ctx = SearchContext::new(Assignment::default());
/// let engine = EngineBuilder::new()
///     .add(Box::new(IntegerRangePredicate::new(1, 4)))  // Try 1, 2, 3
///     .terminal(Box::new(SuspendPredicate))              // Terminal predicate
///     .build();
///
/// let engine = engine.search(&mut ctx);
/// assert!(engine.is_some()); // Suspended - engine returned
/// assert_eq!(ctx.state.values, vec![1]);
/// ```
#[derive(Debug)]
pub struct IntegerRangePredicate {
    start: i32,
    end: i32,
}

impl IntegerRangePredicate {
    /// Create a new IntegerRangePredicate that tries integers in [start, end).
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Get the count of integers in the range.
    pub fn count(&self) -> usize {
        (self.end - self.start).max(0) as usize
    }
}

impl Predicate<Assignment> for IntegerRangePredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext<Assignment>, _round: usize) -> PredicateResult {
        let count = self.count();
        if count > 0 {
            PredicateResult::Choices(count)
        } else {
            PredicateResult::Failure
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext<Assignment>,
        _round: usize,
        choice: usize,
    ) -> PredicateResult {
        let value = self.start + choice as i32;
        if value < self.end {
            ctx.state.assign(&mut ctx.trail, value);
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "IntegerRange"
    }
}

/// Predicate that tries a fixed list of choices without changing state.
#[derive(Debug)]
pub struct ChoicePredicate<T> {
    options: Vec<T>,
}

impl<T> ChoicePredicate<T> {
    /// Create a new ChoicePredicate with the given options.
    pub fn new(options: Vec<T>) -> Self {
        Self { options }
    }
}

impl<S: Restore, T: std::fmt::Debug> Predicate<S> for ChoicePredicate<T> {
    fn try_pred(&mut self, _ctx: &mut SearchContext<S>, _round: usize) -> PredicateResult {
        if self.options.is_empty() {
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(self.options.len())
        }
    }

    fn retry_pred(&mut self, _ctx: &mut SearchContext<S>, _round: usize, choice: usize) -> PredicateResult {
        if choice < self.options.len() {
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "Choice"
    }
}

/// Predicate that runs for a fixed number of rounds, then succeeds.
#[derive(Debug)]
pub struct MultiRoundPredicate {
    rounds: usize,
}

impl MultiRoundPredicate {
    pub fn new(rounds: usize) -> Self {
        Self { rounds }
    }
}

impl<S: Restore> Predicate<S> for MultiRoundPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext<S>, round: usize) -> PredicateResult {
        if round + 1 < self.rounds {
            PredicateResult::SuccessSamePredicate
        } else {
            PredicateResult::Success
        }
    }

    fn name(&self) -> &str {
        "MultiRound"
    }
}

/// Records the current assignment, then succeeds.
#[derive(Debug)]
pub struct RecordPredicate;

impl Predicate<Assignment> for RecordPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<Assignment>, _round: usize) -> PredicateResult {
        let snapshot = ctx.state.values.clone();
        ctx.state.solutions.push(snapshot);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Record"
    }
}

/// Predicate that always succeeds.
#[derive(Debug)]
pub struct AlwaysSucceedPredicate;

impl<S: Restore> Predicate<S> for AlwaysSucceedPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext<S>, _round: usize) -> PredicateResult {
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "AlwaysSucceed"
    }
}

/// Predicate that always fails (non-terminal, for forcing backtracking).
#[derive(Debug)]
pub struct AlwaysFailPredicate;

impl<S: Restore> Predicate<S> for AlwaysFailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext<S>, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "AlwaysFail"
    }
}
