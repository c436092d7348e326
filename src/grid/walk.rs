// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Walking one word through a grid.

use tracing::debug;

use super::{Direction, Grid, Mark, VISITED};
use crate::context::SearchContext;
use crate::engine::{EngineBuilder, Predicate, PredicateResult};
use crate::predicates::SuspendPredicate;
use crate::state::Counters;
use crate::trail::{Restore, Trail};

/// Grid borrowed for the duration of one search, plus the path so far.
#[derive(Debug)]
pub struct WordWalk<'g> {
    grid: &'g mut Grid,
    word: Vec<char>,
    path: Vec<usize>,
}

impl<'g> WordWalk<'g> {
    pub fn new(grid: &'g mut Grid, word: &str) -> Self {
        Self {
            grid,
            word: word.chars().collect(),
            path: Vec::new(),
        }
    }

    /// Cells matched so far, as row-major indices.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Enter `cell`: overwrite it with the visited marker.
    fn visit(&mut self, trail: &mut Trail<Mark>, cell: usize) {
        let original = self.grid.replace(cell, VISITED);
        self.path.push(cell);
        trail.record_change(Mark { cell, original });
    }
}

impl Restore for WordWalk<'_> {
    type Change = Mark;

    fn restore(&mut self, mark: Mark) {
        self.grid.replace(mark.cell, mark.original);
        self.path.pop();
    }
}

/// Round `r` matches `word[r]`. Round 0 offers every cell as a start,
/// later rounds offer the four neighbours of the last matched cell.
#[derive(Debug)]
struct WalkPredicate;

impl<'g> Predicate<WordWalk<'g>> for WalkPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<WordWalk<'g>>, round: usize) -> PredicateResult {
        ctx.statistics.increment(Counters::Nodes);
        if round == ctx.state.word.len() {
            ctx.statistics.increment(Counters::Solutions);
            return PredicateResult::Success;
        }

        let count = if round == 0 {
            ctx.state.grid.len()
        } else {
            Direction::ALL.len()
        };
        match count {
            0 => PredicateResult::Failure,
            n => PredicateResult::Choices(n),
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext<WordWalk<'g>>,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        let walk = &ctx.state;
        let cell = match walk.path.last() {
            None => Some(choice),
            Some(&last) => walk.grid.step(last, Direction::ALL[choice]),
        };
        let Some(cell) = cell else {
            return PredicateResult::Failure;
        };

        let current = walk.grid.cell(cell);
        if current == VISITED || current != walk.word[round] {
            return PredicateResult::Failure;
        }

        ctx.state.visit(&mut ctx.trail, cell);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "Walk"
    }
}

/// Search for `word`, leaving the context suspended on the first match.
///
/// Returns whether a match was found. The caller must rewind `ctx` to
/// restore the grid.
fn walk_first(ctx: &mut SearchContext<WordWalk<'_>>) -> bool {
    let engine = EngineBuilder::new()
        .add(Box::new(WalkPredicate))
        .terminal(Box::new(SuspendPredicate))
        .build();
    let found = engine.search(ctx).is_some();
    debug!(
        found,
        nodes = ctx.statistics.get(Counters::Nodes),
        "word walk finished"
    );
    found
}

/// Whether `word` can be read along a path of adjacent, unrepeated cells.
///
/// The grid is borrowed mutably because cells are marked in place during
/// the search; it is identical to its original state when this returns.
/// An empty word is never found.
pub fn word_exists(grid: &mut Grid, word: &str) -> bool {
    word_path(grid, word).is_some()
}

/// The cells, as (row, col), of the first path spelling `word`.
///
/// Start cells are tried in row-major order and neighbours in
/// [`Direction::ALL`] order, so the path returned is deterministic.
pub fn word_path(grid: &mut Grid, word: &str) -> Option<Vec<(usize, usize)>> {
    if word.is_empty() || grid.is_empty() {
        return None;
    }

    let mut ctx = SearchContext::new(WordWalk::new(grid, word));
    let path = walk_first(&mut ctx).then(|| {
        let walk = &ctx.state;
        walk.path
            .iter()
            .map(|&cell| walk.grid.coordinates(cell))
            .collect()
    });
    ctx.rewind_all();
    path
}
