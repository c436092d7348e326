// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Finding many words in a grid at once.
//!
//! The search descends a [`Trie`] in lockstep with the grid: from each
//! start cell it follows adjacent, unvisited cells only while the letters
//! read so far are a prefix of some word. Cells are marked in place exactly
//! as in [`crate::grid::word_exists`], and every mark is undone before the
//! search returns.
//!
//! ```
//! use backtrack_search::grid::Grid;
//! use backtrack_search::words::find_all_words;
//!
//! let mut grid = Grid::from_rows(&["oaan", "etae", "ihkr", "iflv"]).unwrap();
//! let found = find_all_words(&mut grid, &["oath", "pea", "eat", "rain"]);
//! assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["eat", "oath"]);
//! ```

use std::collections::BTreeSet;

use tracing::debug;

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, Predicate, PredicateResult};
use crate::grid::{Direction, Grid, Mark, VISITED};
use crate::predicates::FailPredicate;
use crate::state::Counters;
use crate::trail::{Restore, Trail};
use crate::trie::{Matcher, NodeId, Trie};

/// Search state: the grid being walked, the trie position at each step of
/// the current path, and the words reported so far.
#[derive(Debug)]
pub struct TrieWalk<'g, 't> {
    grid: &'g mut Grid,
    matcher: Matcher<'t>,
    path: Vec<(usize, NodeId)>,
    found: Vec<String>,
}

impl<'g, 't> TrieWalk<'g, 't> {
    pub fn new(grid: &'g mut Grid, trie: &'t Trie) -> Self {
        Self {
            grid,
            matcher: Matcher::new(trie),
            path: Vec::new(),
            found: Vec::new(),
        }
    }

    /// Trie node for the letters read so far.
    fn node(&self) -> NodeId {
        self.path.last().map_or(Trie::ROOT, |&(_, node)| node)
    }

    fn visit(&mut self, trail: &mut Trail<Mark>, cell: usize, node: NodeId) {
        let original = self.grid.replace(cell, VISITED);
        self.path.push((cell, node));
        trail.record_change(Mark { cell, original });
    }

    /// Words found, in discovery order.
    pub fn found(&self) -> &[String] {
        &self.found
    }
}

impl Restore for TrieWalk<'_, '_> {
    type Change = Mark;

    fn restore(&mut self, mark: Mark) {
        self.grid.replace(mark.cell, mark.original);
        self.path.pop();
    }
}

#[derive(Debug)]
struct TrieWalkPredicate;

impl<'g, 't> Predicate<TrieWalk<'g, 't>> for TrieWalkPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<TrieWalk<'g, 't>>, round: usize) -> PredicateResult {
        ctx.statistics.increment(Counters::Nodes);
        let node = ctx.state.node();

        if round > 0 {
            if let Some(word) = ctx.state.matcher.match_and_consume(node) {
                ctx.statistics.increment(Counters::Solutions);
                ctx.state.found.push(word.to_string());
            }
        }

        if ctx.state.matcher.trie().is_leaf(node) {
            ctx.statistics.increment(Counters::Prunes);
            return PredicateResult::Failure;
        }

        if round == 0 {
            PredicateResult::Choices(ctx.state.grid.len())
        } else {
            PredicateResult::Choices(Direction::ALL.len())
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext<TrieWalk<'g, 't>>,
        _round: usize,
        choice: usize,
    ) -> PredicateResult {
        let walk = &ctx.state;
        let cell = match walk.path.last() {
            None => Some(choice),
            Some(&(last, _)) => walk.grid.step(last, Direction::ALL[choice]),
        };
        let Some(cell) = cell else {
            return PredicateResult::Failure;
        };

        let symbol = walk.grid.cell(cell);
        if symbol == VISITED {
            return PredicateResult::Failure;
        }
        let Some(child) = walk.matcher.descend(walk.node(), symbol) else {
            return PredicateResult::Failure;
        };

        ctx.state.visit(&mut ctx.trail, cell, child);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "TrieWalk"
    }
}

/// Every word of `trie` readable in `grid`, in the order first discovered.
///
/// Start cells are tried in row-major order and neighbours in
/// [`Direction::ALL`] order. The trie is not modified, so it can be reused.
pub fn find_words_in_order(grid: &mut Grid, trie: &Trie) -> Vec<String> {
    if grid.is_empty() || trie.is_empty() {
        return Vec::new();
    }

    let mut ctx = SearchContext::new(TrieWalk::new(grid, trie));
    let engine = EngineBuilder::new()
        .add(Box::new(TrieWalkPredicate))
        .terminal(Box::new(FailPredicate))
        .build();
    let exhausted = engine.search(&mut ctx).is_none();
    debug_assert!(exhausted);
    debug!(
        found = ctx.state.found.len(),
        nodes = ctx.statistics.get(Counters::Nodes),
        prunes = ctx.statistics.get(Counters::Prunes),
        "trie walk finished"
    );

    ctx.into_state().found
}

/// Every word of `trie` readable in `grid`.
pub fn find_words(grid: &mut Grid, trie: &Trie) -> BTreeSet<String> {
    find_words_in_order(grid, trie).into_iter().collect()
}

/// Every word of `words` readable in `grid`.
///
/// Words that are empty or use symbols outside the trie alphabet are never
/// found.
pub fn find_all_words<S: AsRef<str>>(grid: &mut Grid, words: &[S]) -> BTreeSet<String> {
    let trie = Trie::from_words(words);
    find_words(grid, &trie)
}
