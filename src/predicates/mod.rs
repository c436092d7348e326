// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates shared by the searches in this crate.
//!
//! # Organization
//!
//! - `explore`: the rule-driven predicate behind every subset, combination
//!   and permutation search
//! - `test`: Simple test predicates for validating the engine
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod explore;
pub mod test;

pub use explore::{ExplorePredicate, Rule, Visit};

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};
use crate::trail::Restore;

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Exhaustive searches
/// end with it: solutions are recorded as side effects along the way, and
/// the failure drives the engine on to the next alternative.
///
/// # Example
///
/// ```
/// use backtrack_search::engine::EngineBuilder;
/// use backtrack_search::predicates::FailPredicate;
/// use backtrack_search::predicates::test::{Assignment, IntegerRangePredicate};
/// use backtrack_search::context::SearchContext;
///
/// let mut ctx = SearchContext::new(Assignment::default());
/// let engine = EngineBuilder::new()
///     .add(Box::new(IntegerRangePredicate::new(1, 3)))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all integer choices then fail
/// let result = engine.search(&mut ctx);
/// assert!(result.is_none()); // Failed - engine consumed
/// assert!(ctx.state.values.is_empty()); // Every assignment undone
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl<S: Restore> Predicate<S> for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext<S>, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl<S: Restore> TerminalPredicate<S> for FailPredicate {}

/// Built-in suspend predicate.
///
/// Stops the search with the state intact, so the caller can inspect the
/// first solution found. The engine can be resumed to look for the next one.
#[derive(Debug)]
pub struct SuspendPredicate;

impl<S: Restore> Predicate<S> for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext<S>, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl<S: Restore> TerminalPredicate<S> for SuspendPredicate {}
