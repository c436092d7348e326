// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for building search inputs.
//!
//! The searches themselves are total and never fail. Errors only arise when
//! turning raw input (grid rows, keypad digits, command-line values) into
//! the types the searches accept.

use thiserror::Error;

/// A grid could not be built from the given rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Rows must all have the width of the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The visited marker cannot appear in the input.
    #[error("cell ({row}, {col}) holds the reserved visited marker '{marker}'")]
    ReservedMarker { row: usize, col: usize, marker: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("'{0}' is not a keypad digit")]
    InvalidDigit(char),

    #[error("'{0}' is not a letter of the trie alphabet")]
    InvalidSymbol(char),

    #[error(transparent)]
    Grid(#[from] GridError),
}
