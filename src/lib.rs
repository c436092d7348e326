// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking search.
//!
//! Classic exhaustive searches (subsets, combination sums, permutations,
//! word search in a character grid, keypad spellings, dictionary order of
//! integers) written as predicate programs for one backtracking engine.
//!
//! # Architecture
//!
//! ## Trail
//!
//! Every change a search makes to its state is recorded on a [`Trail`].
//! Backtracking rewinds the trail to an earlier length, undoing the changes in
//! reverse order, so the state after backtracking is exactly the state
//! before the choice was made.
//!
//! ## Engine
//!
//! A search is a sequence of [`Predicate`]s ending in a terminal predicate
//! (`FAIL` to enumerate everything, `SUSPEND` to stop at the first answer).
//! The [`SearchEngine`] keeps an explicit stack of choice points, so search
//! depth is not limited by the native call stack.
//!
//! ## Searches
//!
//! - [`combinatorics`]: one [`predicates::Rule`] per problem, run over a
//!   trailed [`state::Selection`].
//! - [`grid`] and [`words`]: cells are marked in place while on the path;
//!   marks are trailed, so the grid is restored on every exit.
//! - [`trie`]: the dictionary for multi-word search. Searches never modify
//!   it, so one trie can be searched repeatedly.
//! - [`keypad`] and [`lexical`]: small digit-by-digit enumerations.
//!
//! All searches are single-threaded and synchronous. Each call owns its
//! state; nothing is shared between calls.

pub mod combinatorics;
pub mod context;
pub mod engine;
pub mod errors;
pub mod grid;
pub mod keypad;
pub mod lexical;
pub mod predicates;
pub mod state;
pub mod trail;
pub mod trie;
pub mod words;

// Re-export commonly used types
pub use context::SearchContext;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use errors::{GridError, SearchError};
pub use grid::Grid;
pub use trail::{Restore, Trail};
pub use trie::Trie;
