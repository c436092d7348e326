// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common fixtures shared across integration tests.

#![allow(dead_code)]

use backtrack_search::Grid;

/// Rows of the board used for single-word search.
pub const WORD_ROWS: [&str; 3] = ["ABCE", "SFCS", "ADEE"];

/// Rows of the board used for dictionary search.
pub const DICTIONARY_ROWS: [&str; 4] = ["oaan", "etae", "ihkr", "iflv"];

pub const DICTIONARY: [&str; 4] = ["oath", "pea", "eat", "rain"];

pub fn word_board() -> Grid {
    Grid::from_rows(&WORD_ROWS).expect("rectangular board")
}

pub fn dictionary_board() -> Grid {
    Grid::from_rows(&DICTIONARY_ROWS).expect("rectangular board")
}

/// Every sub-sequence of `values`, as index masks applied in order.
///
/// An independent enumeration to check search results against.
pub fn all_masks<T: Clone>(values: &[T]) -> Vec<Vec<T>> {
    (0u32..1 << values.len())
        .map(|mask| {
            values
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, v)| v.clone())
                .collect()
        })
        .collect()
}

pub fn sorted<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    items.sort();
    items
}
