// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Letter combinations spelled by a phone-keypad digit string.

use tracing::debug;

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
use crate::errors::SearchError;
use crate::predicates::FailPredicate;
use crate::state::{Counters, Statistics};
use crate::trail::{Restore, Trail};

/// Symbols for each key, indexed by digit. `0` and `1` stand for themselves.
const KEYS: [&str; 10] = [
    "0", "1", "abc", "def", "ghi", "jkl", "mno", "pqrs", "tuv", "wxyz",
];

/// The symbols a keypad digit stands for.
pub fn key_symbols(digit: char) -> Result<&'static str, SearchError> {
    digit
        .to_digit(10)
        .map(|d| KEYS[d as usize])
        .ok_or(SearchError::InvalidDigit(digit))
}

#[derive(Debug)]
struct Dial {
    keys: Vec<Vec<char>>,
    spelled: String,
    results: Vec<String>,
}

/// A pushed symbol; restoring pops it.
#[derive(Debug)]
struct Pushed;

impl Restore for Dial {
    type Change = Pushed;

    fn restore(&mut self, _change: Pushed) {
        self.spelled.pop();
    }
}

impl Dial {
    fn push(&mut self, trail: &mut Trail<Pushed>, symbol: char) {
        self.spelled.push(symbol);
        trail.record_change(Pushed);
    }
}

fn dial_program() -> SearchEngine<Dial> {
    EngineBuilder::new()
        .add(Box::new(DialPredicate))
        .add(Statistics::counting_predicate(Counters::Solutions, None))
        .terminal(Box::new(FailPredicate))
        .build()
}

/// Round `r` picks a symbol for the `r`th digit.
#[derive(Debug)]
struct DialPredicate;

impl Predicate<Dial> for DialPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<Dial>, round: usize) -> PredicateResult {
        ctx.statistics.increment(Counters::Nodes);
        match ctx.state.keys.get(round) {
            None => {
                let spelled = ctx.state.spelled.clone();
                ctx.state.results.push(spelled);
                PredicateResult::Success
            }
            Some(symbols) => PredicateResult::Choices(symbols.len()),
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext<Dial>,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        let symbol = ctx.state.keys[round][choice];
        ctx.state.push(&mut ctx.trail, symbol);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "Dial"
    }
}

/// Every string spelled by choosing one symbol per digit, in keypad order.
///
/// ```
/// use backtrack_search::keypad::letter_combinations;
///
/// let spelled = letter_combinations("23").unwrap();
/// assert_eq!(spelled, ["ad", "ae", "af", "bd", "be", "bf", "cd", "ce", "cf"]);
/// ```
///
/// An empty digit string spells nothing.
pub fn letter_combinations(digits: &str) -> Result<Vec<String>, SearchError> {
    let keys = digits
        .chars()
        .map(|digit| key_symbols(digit).map(|symbols| symbols.chars().collect()))
        .collect::<Result<Vec<Vec<char>>, _>>()?;
    if keys.is_empty() {
        return Ok(Vec::new());
    }

    let mut ctx = SearchContext::new(Dial {
        keys,
        spelled: String::new(),
        results: Vec::new(),
    });
    let exhausted = dial_program().search(&mut ctx).is_none();
    debug_assert!(exhausted);
    debug!(
        digits,
        solutions = ctx.statistics.get(Counters::Solutions),
        "keypad search finished"
    );

    Ok(ctx.into_state().results)
}
