// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine.
//!
//! These tests validate that the engine correctly:
//! - Runs predicates in sequence
//! - Handles Choices and retry_pred correctly
//! - Backtracks on failure and undoes trailed changes
//! - Supports SuccessSamePredicate for multi-round predicates
//! - Suspends and resumes

use backtrack_search::context::SearchContext;
use backtrack_search::engine::EngineBuilder;
use backtrack_search::predicates::test::{
    AlwaysFailPredicate, Assignment, ChoicePredicate, IntegerRangePredicate, MultiRoundPredicate,
    RecordPredicate,
};
use backtrack_search::predicates::{FailPredicate, SuspendPredicate};
use backtrack_search::state::{Counters, Statistics};

fn context() -> SearchContext<Assignment> {
    SearchContext::new(Assignment::default())
}

#[test]
fn test_simple_integer_search_with_suspend() {
    let mut ctx = context();
    let engine = EngineBuilder::new()
        .add(Box::new(IntegerRangePredicate::new(1, 11)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx);
    assert!(engine.is_some()); // Suspended
    let (tries, retries) = engine.unwrap().statistics();
    assert_eq!(tries, 2); // IntegerRange.try_pred + Suspend.try_pred
    assert_eq!(retries, 1); // IntegerRange.retry_pred(choice=0)
    assert_eq!(ctx.state.values, vec![1]);
}

#[test]
fn test_two_integer_ranges() {
    let mut ctx = context();
    let engine = EngineBuilder::new()
        .add(Box::new(IntegerRangePredicate::new(1, 3)))
        .add(Box::new(IntegerRangePredicate::new(10, 12)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap();
    let (tries, retries) = engine.statistics();
    assert_eq!(tries, 3);
    assert_eq!(retries, 2);
    assert_eq!(ctx.state.values, vec![1, 10]);
}

#[test]
fn test_choice_predicate_search() {
    let mut ctx = context();
    let engine = EngineBuilder::new()
        .add(Box::new(ChoicePredicate::new(vec!["A", "B", "C"])))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap();
    let (tries, retries) = engine.statistics();
    assert_eq!(tries, 2);
    assert_eq!(retries, 1);
}

#[test]
fn test_backtracking_exhausts_and_restores() {
    let mut ctx = context();
    let engine = EngineBuilder::new()
        .add(Box::new(IntegerRangePredicate::new(1, 4)))
        .add(Box::new(IntegerRangePredicate::new(10, 13)))
        .add(Box::new(AlwaysFailPredicate))
        .terminal(Box::new(SuspendPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert!(ctx.state.values.is_empty());
    assert!(ctx.trail.is_empty());
}

#[test]
fn test_empty_search_space() {
    let mut ctx = context();
    let engine = EngineBuilder::new()
        .add(Box::new(IntegerRangePredicate::new(1, 1)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
}

#[test]
fn test_multi_round_predicate() {
    let mut ctx = context();
    let engine = EngineBuilder::new()
        .add(Box::new(MultiRoundPredicate::new(3)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap();
    let (tries, retries) = engine.statistics();
    // MultiRound(0, 1, 2) + Suspend
    assert_eq!(tries, 4);
    assert_eq!(retries, 0);
}

#[test]
fn test_enumerate_all_with_fail() {
    let mut ctx = context();
    let engine = EngineBuilder::new()
        .add(Box::new(IntegerRangePredicate::new(1, 3)))
        .add(Box::new(IntegerRangePredicate::new(10, 12)))
        .add(Box::new(RecordPredicate))
        .add(Statistics::counting_predicate(Counters::Solutions, None))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(
        ctx.state.solutions,
        vec![vec![1, 10], vec![1, 11], vec![2, 10], vec![2, 11]]
    );
    assert_eq!(ctx.statistics.get(Counters::Solutions), 4);
    assert!(ctx.state.values.is_empty());
}

#[test]
fn test_resume_walks_every_solution() {
    let mut ctx = context();
    let mut engine = Some(
        EngineBuilder::new()
            .add(Box::new(IntegerRangePredicate::new(1, 3)))
            .add(Box::new(ChoicePredicate::new(vec!["x", "y"])))
            .terminal(Box::new(SuspendPredicate))
            .build(),
    );

    let mut seen = Vec::new();
    while let Some(suspended) = engine.take().and_then(|e| e.search(&mut ctx)) {
        seen.push(ctx.state.values.clone());
        engine = Some(suspended);
    }
    // The choice predicate changes no state, so each value shows twice.
    assert_eq!(seen, vec![vec![1], vec![1], vec![2], vec![2]]);
    assert!(ctx.state.values.is_empty());
}

#[test]
fn test_counting_filter() {
    let mut ctx = context();
    let engine = EngineBuilder::new()
        .add(Box::new(IntegerRangePredicate::new(1, 7)))
        .add(Statistics::counting_predicate(
            Counters::Solutions,
            Some(|ctx: &SearchContext<Assignment>| ctx.state.values.last() == Some(&3)),
        ))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(ctx.statistics.get(Counters::Solutions), 1);
}

#[test]
fn test_empty_predicates() {
    let mut ctx = context();
    let engine = EngineBuilder::new()
        .terminal(Box::new(SuspendPredicate))
        .build();

    // Suspends immediately with just the terminal
    assert!(engine.search(&mut ctx).is_some());
}
