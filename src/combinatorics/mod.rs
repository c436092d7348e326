// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Subsets, combination sums and permutations.
//!
//! Each search here is one [`Rule`] run by [`ExplorePredicate`]. Results come
//! back in depth-first, left-to-right order over the choice set, which makes
//! the output order a deterministic function of the input order.
//!
//! Duplicate-suppressing variants sort their input first so equal values sit
//! next to each other. At any one level an equal value is then only tried
//! at its first position.
//!
//! ```
//! use backtrack_search::combinatorics::{combination_sum, subsets_unique};
//!
//! assert_eq!(combination_sum(&[2, 3, 6, 7], 7), vec![vec![2, 2, 3], vec![7]]);
//! assert_eq!(subsets_unique(&[2, 1, 2]).len(), 6);
//! ```

use std::fmt::Debug;

use tracing::debug;

use crate::context::SearchContext;
use crate::engine::EngineBuilder;
use crate::predicates::{ExplorePredicate, FailPredicate, Rule, Visit};
use crate::state::{Counters, Selection};

/// Smallest digit used by [`combination_sum_fixed_size`].
pub const MIN_DIGIT: u32 = 1;
/// Largest digit used by [`combination_sum_fixed_size`].
pub const MAX_DIGIT: u32 = 9;

/// Start just after the last pick: each position is used at most once.
fn after_last<T>(selection: &Selection<T>) -> usize {
    selection.last_position().map_or(0, |position| position + 1)
}

/// Start at the last pick: the same position may be picked again.
fn from_last<T>(selection: &Selection<T>) -> usize {
    selection.last_position().unwrap_or(0)
}

/// Equal to the previous candidate at the same level.
fn repeats_previous<T: PartialEq>(selection: &Selection<T>, position: usize, first: usize) -> bool {
    let choices = selection.choices();
    position > first && choices[position] == choices[position - 1]
}

fn visit_sum<T>(selection: &Selection<T>) -> Visit {
    match selection.remaining() {
        r if r < 0 => Visit::Prune,
        0 => Visit::Accept,
        _ => Visit::Expand,
    }
}

#[derive(Debug)]
struct AllSubsets;

impl<T> Rule<T> for AllSubsets {
    fn visit(&self, _selection: &Selection<T>) -> Visit {
        Visit::AcceptAndExpand
    }

    fn first_candidate(&self, selection: &Selection<T>) -> usize {
        after_last(selection)
    }
}

#[derive(Debug)]
struct DistinctSubsets;

impl<T: PartialEq> Rule<T> for DistinctSubsets {
    fn visit(&self, _selection: &Selection<T>) -> Visit {
        Visit::AcceptAndExpand
    }

    fn first_candidate(&self, selection: &Selection<T>) -> usize {
        after_last(selection)
    }

    fn skip(&self, selection: &Selection<T>, position: usize, first: usize) -> bool {
        repeats_previous(selection, position, first)
    }
}

#[derive(Debug)]
struct ReusableSum;

impl Rule<u32> for ReusableSum {
    fn visit(&self, selection: &Selection<u32>) -> Visit {
        visit_sum(selection)
    }

    fn first_candidate(&self, selection: &Selection<u32>) -> usize {
        from_last(selection)
    }

    fn weight(&self, value: &u32) -> i64 {
        i64::from(*value)
    }
}

#[derive(Debug)]
struct SingleUseSum;

impl Rule<u32> for SingleUseSum {
    fn visit(&self, selection: &Selection<u32>) -> Visit {
        visit_sum(selection)
    }

    fn first_candidate(&self, selection: &Selection<u32>) -> usize {
        after_last(selection)
    }

    fn skip(&self, selection: &Selection<u32>, position: usize, first: usize) -> bool {
        repeats_previous(selection, position, first)
    }

    fn weight(&self, value: &u32) -> i64 {
        i64::from(*value)
    }
}

#[derive(Debug)]
struct FixedArity {
    k: usize,
}

impl Rule<u32> for FixedArity {
    fn visit(&self, selection: &Selection<u32>) -> Visit {
        let depth = selection.depth();
        if depth > self.k {
            Visit::Prune
        } else if depth == self.k && selection.remaining() == 0 {
            Visit::Accept
        } else {
            Visit::Expand
        }
    }

    fn first_candidate(&self, selection: &Selection<u32>) -> usize {
        after_last(selection)
    }

    fn weight(&self, value: &u32) -> i64 {
        i64::from(*value)
    }
}

#[derive(Debug)]
struct Arrangements;

impl<T> Rule<T> for Arrangements {
    fn visit(&self, selection: &Selection<T>) -> Visit {
        if selection.depth() == selection.choices().len() {
            Visit::Accept
        } else {
            Visit::Expand
        }
    }

    fn first_candidate(&self, _selection: &Selection<T>) -> usize {
        0
    }

    fn skip(&self, selection: &Selection<T>, position: usize, _first: usize) -> bool {
        selection.path().contains(&position)
    }
}

#[derive(Debug)]
struct DistinctArrangements;

impl<T: PartialEq> Rule<T> for DistinctArrangements {
    fn visit(&self, selection: &Selection<T>) -> Visit {
        if selection.depth() == selection.choices().len() {
            Visit::Accept
        } else {
            Visit::Expand
        }
    }

    fn first_candidate(&self, _selection: &Selection<T>) -> usize {
        0
    }

    /// An equal value may only follow its left neighbour once that
    /// neighbour is already on the path.
    fn skip(&self, selection: &Selection<T>, position: usize, _first: usize) -> bool {
        if selection.is_used(position) {
            return true;
        }
        let choices = selection.choices();
        position > 0 && choices[position] == choices[position - 1] && !selection.is_used(position - 1)
    }
}

/// Run one rule to exhaustion and collect what it recorded.
fn explore<T, R>(selection: Selection<T>, rule: R) -> Vec<Vec<T>>
where
    T: Clone,
    R: Rule<T> + 'static,
{
    debug!(?rule, choices = selection.choices().len(), "exploring");
    let mut ctx = SearchContext::new(selection);
    let engine = EngineBuilder::<Selection<T>>::new()
        .add(Box::new(ExplorePredicate::new(rule)))
        .terminal(Box::new(FailPredicate))
        .build();
    let exhausted = engine.search(&mut ctx);
    debug_assert!(exhausted.is_none());

    debug!(
        nodes = ctx.statistics.get(Counters::Nodes),
        solutions = ctx.statistics.get(Counters::Solutions),
        prunes = ctx.statistics.get(Counters::Prunes),
        "exploration finished"
    );
    ctx.into_state().into_results()
}

fn sorted<T: Clone + Ord>(choices: &[T]) -> Vec<T> {
    let mut choices = choices.to_vec();
    choices.sort();
    choices
}

/// Every subset of `choices`, the empty subset first.
///
/// Subsets are produced in depth-first order: each subset is followed by
/// its extensions with later positions. Equal values at different positions
/// are treated as distinct, so `n` choices always give `2^n` subsets.
///
/// ```
/// use backtrack_search::combinatorics::subsets;
///
/// assert_eq!(
///     subsets(&[1, 2, 3]),
///     vec![
///         vec![], vec![1], vec![1, 2], vec![1, 2, 3],
///         vec![1, 3], vec![2], vec![2, 3], vec![3],
///     ]
/// );
/// ```
pub fn subsets<T: Clone>(choices: &[T]) -> Vec<Vec<T>> {
    explore(Selection::new(choices.to_vec()), AllSubsets)
}

/// Every distinct subset of `choices`, each in ascending order.
///
/// The input is sorted first. `[1, 2, 2]` gives
/// `[[], [1], [1, 2], [1, 2, 2], [2], [2, 2]]`.
pub fn subsets_unique<T: Clone + Ord>(choices: &[T]) -> Vec<Vec<T>> {
    explore(Selection::new(sorted(choices)), DistinctSubsets)
}

/// Every multiset of `candidates` summing to `target`, values reusable.
///
/// Candidates are sorted and de-duplicated first, so each combination is
/// ascending and appears once. Zero never contributes to a sum and could be
/// repeated without end, so it is ignored. A `target` of zero yields the
/// single empty combination.
pub fn combination_sum(candidates: &[u32], target: u32) -> Vec<Vec<u32>> {
    let mut choices = sorted(candidates);
    choices.dedup();
    choices.retain(|&value| value > 0);
    explore(
        Selection::with_target(choices, i64::from(target)),
        ReusableSum,
    )
}

/// Every combination of `candidates` summing to `target`, each input
/// position used at most once and no combination repeated.
///
/// ```
/// use backtrack_search::combinatorics::combination_sum_unique;
///
/// assert_eq!(
///     combination_sum_unique(&[10, 1, 2, 7, 6, 1, 5], 8),
///     vec![vec![1, 1, 6], vec![1, 2, 5], vec![1, 7], vec![2, 6]]
/// );
/// ```
pub fn combination_sum_unique(candidates: &[u32], target: u32) -> Vec<Vec<u32>> {
    explore(
        Selection::with_target(sorted(candidates), i64::from(target)),
        SingleUseSum,
    )
}

/// Every set of `k` distinct digits from 1 to 9 summing to `target`.
///
/// ```
/// use backtrack_search::combinatorics::combination_sum_fixed_size;
///
/// assert_eq!(
///     combination_sum_fixed_size(3, 9),
///     vec![vec![1, 2, 6], vec![1, 3, 5], vec![2, 3, 4]]
/// );
/// ```
pub fn combination_sum_fixed_size(k: usize, target: u32) -> Vec<Vec<u32>> {
    let digits = (MIN_DIGIT..=MAX_DIGIT).collect();
    explore(
        Selection::with_target(digits, i64::from(target)),
        FixedArity { k },
    )
}

/// Every ordering of `choices`.
///
/// Positions, not values, are arranged: repeated values give repeated
/// orderings. Use [`permutations_unique`] to suppress them.
pub fn permutations<T: Clone>(choices: &[T]) -> Vec<Vec<T>> {
    explore(Selection::new(choices.to_vec()), Arrangements)
}

/// Every distinct ordering of `choices`.
///
/// ```
/// use backtrack_search::combinatorics::permutations_unique;
///
/// assert_eq!(
///     permutations_unique(&[1, 1, 2]),
///     vec![vec![1, 1, 2], vec![1, 2, 1], vec![2, 1, 1]]
/// );
/// ```
pub fn permutations_unique<T: Clone + Ord>(choices: &[T]) -> Vec<Vec<T>> {
    explore(Selection::new(sorted(choices)), DistinctArrangements)
}
