// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail system to provide
//! automatic state restoration on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (the recursion depth for predicates that descend)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution follows a WAM-like model:
//! 1. Call try_pred(round) on the predicate at the top of the stack
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: push the same predicate with round + 1
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to the previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! A predicate that succeeded from `try_pred` leaves no choice point behind:
//! backtracking into it pops it without calling it again.
//!
//! Because the stack is explicit, search depth is limited by memory rather
//! than by the native call stack.
//!
//! # Example
//!
//! ```
//! use backtrack_search::engine::EngineBuilder;
//! use backtrack_search::context::SearchContext;
//! use backtrack_search::predicates::SuspendPredicate;
//! use backtrack_search::predicates::test::IntegerRangePredicate;
//! use backtrack_search::predicates::test::Assignment;
//!
//! let mut ctx = SearchContext::new(Assignment::default());
//! let engine = EngineBuilder::new()
//!     .add(Box::new(IntegerRangePredicate::new(1, 4)))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Engine is consumed, returns Some(engine) if suspended
//! let engine = engine.search(&mut ctx).expect("suspended on first value");
//! assert_eq!(ctx.state.values, vec![1]);
//!
//! // Resuming backtracks into the last choice point
//! let _engine = engine.search(&mut ctx).expect("suspended on second value");
//! assert_eq!(ctx.state.values, vec![2]);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use tracing::{debug, trace};

use crate::context::SearchContext;
use crate::trail::Restore;

/// Initial capacity of the predicate stack.
const INITIAL_STACK_SIZE: usize = 64;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }

    /// A deterministic success leaves nothing to retry.
    fn exhaust(&mut self) {
        self.in_choice_mode = true;
        self.current_choice = 0;
        self.num_choices = 0;
    }
}

/// Builds a predicate program, which must end with a terminal predicate.
///
/// ```
/// use backtrack_search::engine::EngineBuilder;
/// use backtrack_search::predicates::FailPredicate;
/// use backtrack_search::predicates::test::AlwaysSucceedPredicate;
///
/// let engine = EngineBuilder::<()>::new()
///     .add(Box::new(AlwaysSucceedPredicate))
///     .terminal(Box::new(FailPredicate))
///     .build();
/// assert_eq!(engine.len(), 2);
/// ```
pub struct EngineBuilder<S: Restore> {
    predicates: Vec<Box<dyn Predicate<S>>>,
}

impl<S: Restore> EngineBuilder<S> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate<S>>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate, closing the program.
    pub fn terminal<T>(mut self, predicate: Box<T>) -> TerminatedBuilder<S>
    where
        T: TerminalPredicate<S> + 'static,
    {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

impl<S: Restore> Default for EngineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// A program that ends with a terminal predicate and can be built.
pub struct TerminatedBuilder<S: Restore> {
    predicates: Vec<Box<dyn Predicate<S>>>,
}

impl<S: Restore> TerminatedBuilder<S> {
    pub fn build(self) -> SearchEngine<S> {
        SearchEngine::new(self.predicates)
    }
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the trail system.
pub struct SearchEngine<S: Restore> {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate<S>>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Trail length when the search started; exhaustion rewinds to here.
    base_checkpoint: usize,

    /// Set when the last call to search returned on Suspend.
    suspended: bool,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl<S: Restore> SearchEngine<S> {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which guarantees a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate<S>>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(INITIAL_STACK_SIZE),
            base_checkpoint: 0,
            suspended: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Number of predicates in the program.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Run the search until it suspends or is exhausted.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended. The state in `ctx` is the state at the
    ///   point of suspension. Calling `search` again backtracks into the most
    ///   recent choice point and continues.
    /// - `None` if exhausted. Every change recorded during the search has
    ///   been undone.
    ///
    /// Success is indicated via side effects (state in `ctx`), not by the
    /// return value.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without
    /// FAIL or SUSPEND), or if `retry_pred` returns `Choices` or `Suspend`.
    pub fn search(mut self, ctx: &mut SearchContext<S>) -> Option<Self> {
        if self.suspended {
            // Resume: the suspending entry has nothing left to offer.
            self.suspended = false;
            self.stack.pop();
        } else {
            self.stack.clear();
            self.try_count = 0;
            self.retry_count = 0;

            if self.predicates.is_empty() {
                return None; // Empty is exhausted
            }

            self.base_checkpoint = ctx.trail.len();
            self.stack
                .push(StackEntry::new(0, 0, self.base_checkpoint));
        }

        // Main execution loop
        loop {
            let Some(entry) = self.stack.last_mut() else {
                // Backtracked past the first predicate
                ctx.rewind_to(self.base_checkpoint);
                debug!(
                    tries = self.try_count,
                    retries = self.retry_count,
                    "search exhausted"
                );
                return None;
            };

            // Rewind trail to this entry's checkpoint
            ctx.rewind_to(entry.trail_checkpoint);

            if !entry.in_choice_mode {
                // Call mode: try_pred
                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);
                trace!(
                    predicate = self.predicates[pred_idx].name(),
                    round,
                    ?result,
                    "try"
                );

                match result {
                    PredicateResult::Success => {
                        self.exhaust_top();
                        self.push_next_predicate(ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.exhaust_top();
                        self.push_same_predicate(ctx);
                    }
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        let checkpoint = ctx.trail.len();
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = checkpoint;
                        }
                    }
                    PredicateResult::Suspend => {
                        debug!(
                            predicate = self.predicates[pred_idx].name(),
                            depth = self.stack.len(),
                            "search suspended"
                        );
                        self.suspended = true;
                        return Some(self);
                    }
                }
            } else {
                // Choice mode: retry_pred
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => {
                        self.push_next_predicate(ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.push_same_predicate(ctx);
                    }
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!(
                            "{}::retry_pred returned invalid result: {:?}",
                            self.predicates[pred_idx].name(),
                            result
                        );
                    }
                }
            }
        }
    }

    fn exhaust_top(&mut self) {
        if let Some(entry) = self.stack.last_mut() {
            entry.exhaust();
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self, ctx: &SearchContext<S>) {
        let next_index = self
            .stack
            .last()
            .map_or(0, |current| current.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack
            .push(StackEntry::new(next_index, 0, ctx.trail.len()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext<S>) {
        let (pred_index, next_round) = self
            .stack
            .last()
            .map_or((0, 0), |current| (current.predicate_index, current.round + 1));

        self.stack
            .push(StackEntry::new(pred_index, next_round, ctx.trail.len()));
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}
