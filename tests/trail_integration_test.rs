// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the trail-based backtracking system.
//!
//! These tests verify that the trail works correctly when integrated with
//! SearchContext, and that every search in the crate leaves its inputs as
//! it found them.

mod common;

use backtrack_search::context::SearchContext;
use backtrack_search::grid::word_exists;
use backtrack_search::predicates::test::Assignment;
use backtrack_search::words::{find_all_words, find_words};
use backtrack_search::Trie;

fn context() -> SearchContext<Assignment> {
    SearchContext::new(Assignment::default())
}

#[test]
fn test_search_context_simple_backtracking() {
    let mut ctx = context();

    let checkpoint = ctx.trail.len();
    ctx.state.assign(&mut ctx.trail, 100);
    assert_eq!(ctx.state.values, vec![100]);
    assert_eq!(ctx.trail.len(), 1);

    // Rewind restores old value automatically
    ctx.rewind_to(checkpoint);
    assert!(ctx.state.values.is_empty());
    assert_eq!(ctx.trail.len(), 0);
}

#[test]
fn test_nested_rewinds() {
    let mut ctx = context();

    let cp1 = ctx.trail.len();
    assert_eq!(cp1, 0);
    for value in [999, 888, 777] {
        ctx.state.assign(&mut ctx.trail, value);
    }
    assert_eq!(ctx.trail.len(), 3);

    let cp2 = ctx.trail.len();
    assert_eq!(cp2, 3);
    ctx.state.assign(&mut ctx.trail, 111);
    assert_eq!(ctx.trail.len(), 4);

    ctx.rewind_to(cp2);
    assert_eq!(ctx.state.values, vec![999, 888, 777]);

    ctx.rewind_to(cp1);
    assert!(ctx.state.values.is_empty());
    assert_eq!(ctx.trail.len(), 0);
}

#[test]
fn test_independent_search_contexts() {
    let mut ctx1 = context();
    let mut ctx2 = context();

    let cp1 = ctx1.trail.len();
    ctx1.state.assign(&mut ctx1.trail, 100);
    ctx2.state.assign(&mut ctx2.trail, 200);

    ctx1.rewind_to(cp1);
    assert!(ctx1.state.values.is_empty());
    assert_eq!(ctx2.state.values, vec![200]);
    assert_eq!(ctx2.trail.len(), 1);
}

#[test]
fn test_deep_nesting() {
    let mut ctx = context();

    let checkpoints: Vec<usize> = (0..50)
        .map(|i| {
            let cp = ctx.trail.len();
            ctx.state.assign(&mut ctx.trail, i);
            cp
        })
        .collect();
    assert_eq!(ctx.trail.len(), 50);

    for (i, &cp) in checkpoints.iter().enumerate().rev() {
        ctx.rewind_to(cp);
        assert_eq!(ctx.state.values.len(), i);
    }
    assert!(ctx.trail.is_empty());
}

#[test]
fn test_grid_identical_after_every_search() {
    let mut grid = common::word_board();
    for word in ["ABCCED", "SEE", "ABCB", "", "ASADFBCCEESE", "Z"] {
        word_exists(&mut grid, word);
        assert_eq!(grid, common::word_board(), "after searching {word:?}");
    }

    let mut grid = common::dictionary_board();
    find_all_words(&mut grid, &common::DICTIONARY);
    assert_eq!(grid, common::dictionary_board());

    let trie = Trie::from_words(common::DICTIONARY);
    find_words(&mut grid, &trie);
    assert_eq!(grid, common::dictionary_board());
}
