// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The trie alphabet: an explicit table from symbol to child slot.

use std::fmt;

use crate::errors::SearchError;

/// Symbols the trie branches on, in slot order.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Number of children per trie node.
pub const ALPHABET_SIZE: usize = ALPHABET.len();

/// A symbol of [`ALPHABET`], identified by its child slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// The letter for `symbol`, or `None` outside the alphabet.
    pub fn from_char(symbol: char) -> Option<Self> {
        ALPHABET
            .iter()
            .position(|&a| a == symbol)
            .map(|slot| Letter(slot as u8))
    }

    /// Child slot for this letter.
    pub fn slot(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        ALPHABET[self.slot()]
    }

    /// Every letter, in slot order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_SIZE).map(|slot| Letter(slot as u8))
    }
}

impl TryFrom<char> for Letter {
    type Error = SearchError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Letter::from_char(symbol).ok_or(SearchError::InvalidSymbol(symbol))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_every_letter() {
        for letter in Letter::all() {
            assert_eq!(Letter::from_char(letter.to_char()), Some(letter));
        }
        assert_eq!(Letter::all().count(), ALPHABET_SIZE);
    }

    #[test]
    fn test_slots_follow_table() {
        assert_eq!(Letter::from_char('a').map(Letter::slot), Some(0));
        assert_eq!(Letter::from_char('z').map(Letter::slot), Some(25));
    }

    #[test]
    fn test_symbols_outside_alphabet() {
        assert_eq!(Letter::from_char('A'), None);
        assert_eq!(Letter::from_char('#'), None);
        assert_eq!(Letter::try_from('é'), Err(SearchError::InvalidSymbol('é')));
    }
}
