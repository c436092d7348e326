// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicates: the steps of a search program.
//!
//! A program is a sequence of predicates. Each one either succeeds
//! outright, fails, offers `n` alternatives to be tried one at a time by
//! `retry_pred`, descends one level by staying on itself for the next
//! round, or suspends the whole search.
//!
//! # Example
//!
//! A predicate that assigns a sign, trying `+1` before `-1`:
//!
//! ```
//! use backtrack_search::context::SearchContext;
//! use backtrack_search::engine::{Predicate, PredicateResult};
//! use backtrack_search::predicates::test::Assignment;
//!
//! #[derive(Debug)]
//! struct Sign;
//!
//! impl Predicate<Assignment> for Sign {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext<Assignment>, _round: usize) -> PredicateResult {
//!         PredicateResult::Choices(2)
//!     }
//!
//!     fn retry_pred(
//!         &mut self,
//!         ctx: &mut SearchContext<Assignment>,
//!         _round: usize,
//!         choice: usize,
//!     ) -> PredicateResult {
//!         let sign = if choice == 0 { 1 } else { -1 };
//!         ctx.state.assign(&mut ctx.trail, sign);
//!         PredicateResult::Success
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Sign"
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::context::SearchContext;
use crate::trail::Restore;

/// Result of attempting a predicate.
///
/// Predicates can return:
/// - `Success`: Move to next predicate in the sequence
/// - `SuccessSamePredicate`: Stay at same predicate, increment round (descend one level)
/// - `Failure`: Backtrack to previous choice point
/// - `Choices(n)`: Predicate has n choices to explore via retry_pred
/// - `Suspend`: Pause execution with the current state intact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate succeeded but stay at same predicate with next round.
    /// Recursive searches use this to go one level deeper.
    SuccessSamePredicate,

    /// Predicate has no (more) valid choices. Backtrack.
    Failure,

    /// Predicate has multiple choices to explore.
    /// Engine will call retry_pred(round, choice) for each choice in 0..n.
    Choices(usize),

    /// Suspend execution. Engine returns control with state preserved.
    Suspend,
}

/// Trait for search predicates in the non-deterministic engine.
///
/// `S` is the search state held by the [`SearchContext`]. The engine calls
/// `try_pred` to attempt the predicate for the first time, and `retry_pred`
/// for each alternative after `try_pred` returned `Choices(n)`.
///
/// # Trail Integration
///
/// Predicates change `ctx.state` only through methods that record the
/// change on `ctx.trail`. Before every `try_pred`/`retry_pred` the engine
/// rewinds the trail to the checkpoint of the stack entry being run, so a
/// predicate always sees the state exactly as it was when the entry was
/// created (or when its choices were offered).
pub trait Predicate<S: Restore>: Debug {
    /// Try this predicate for a given round.
    ///
    /// The round starts at 0 and increments each time the predicate returns
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext<S>, round: usize) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n.
    /// Can return `Success`, `SuccessSamePredicate` or `Failure`; returning
    /// `Choices` or `Suspend` here is a bug and makes the engine panic.
    ///
    /// The trail has already been rewound to the state before this choice was tried.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext<S>,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // Predicates that return Choices must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name for logging and debugging. Defaults to the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A terminal predicate that ends a program.
///
/// Terminal predicates fail or suspend; they never return Success. The
/// `EngineBuilder` only builds programs whose last predicate implements
/// this trait.
pub trait TerminalPredicate<S: Restore>: Predicate<S> {}
