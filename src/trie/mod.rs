// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Prefix tree over [`ALPHABET`].
//!
//! Nodes live in an arena and refer to their children by [`NodeId`]; each
//! node has exactly one parent. A node that ends a word stores the word
//! itself, so a match can be reported without rebuilding the string from
//! the path.
//!
//! The trie is never changed by a search. De-duplication of matches is the
//! job of a [`Matcher`], which keeps its own record of what it has already
//! reported, so one trie can serve any number of searches.

pub mod alphabet;

pub use alphabet::{Letter, ALPHABET, ALPHABET_SIZE};

use tracing::debug;

use crate::errors::SearchError;

/// Index of a node in the trie arena.
pub type NodeId = usize;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: [Option<NodeId>; ALPHABET_SIZE],
    word: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Trie {
    /// The root node, matching the empty prefix.
    pub const ROOT: NodeId = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }

    /// Build a trie from a word list.
    ///
    /// Words with symbols outside the alphabet can never be matched and are
    /// left out. The result does not depend on the order of `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            let word = word.as_ref();
            if let Err(error) = trie.insert(word) {
                debug!(word, %error, "word left out of trie");
            }
        }
        trie
    }

    /// Insert `word`. Returns `Ok(true)` if it was not already present.
    ///
    /// The empty word is ignored.
    pub fn insert(&mut self, word: &str) -> Result<bool, SearchError> {
        let letters = word
            .chars()
            .map(Letter::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        if letters.is_empty() {
            return Ok(false);
        }

        let mut node = Self::ROOT;
        for letter in letters {
            node = match self.nodes[node].children[letter.slot()] {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children[letter.slot()] = Some(child);
                    child
                }
            };
        }

        let terminal = &mut self.nodes[node].word;
        if terminal.is_some() {
            return Ok(false);
        }
        *terminal = Some(word.to_string());
        self.words += 1;
        Ok(true)
    }

    /// The child of `node` for `letter`.
    pub fn child(&self, node: NodeId, letter: Letter) -> Option<NodeId> {
        self.nodes[node].children[letter.slot()]
    }

    /// The child of `node` for `symbol`; `None` for symbols outside the alphabet.
    pub fn step(&self, node: NodeId, symbol: char) -> Option<NodeId> {
        Letter::from_char(symbol).and_then(|letter| self.child(node, letter))
    }

    /// The word ending at `node`, if any.
    pub fn word_at(&self, node: NodeId) -> Option<&str> {
        self.nodes[node].word.as_deref()
    }

    /// Whether `node` has no children.
    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.nodes[node].children.iter().all(Option::is_none)
    }

    /// The node reached by reading `prefix` from the root.
    pub fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .chars()
            .try_fold(Self::ROOT, |node, symbol| self.step(node, symbol))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(word).and_then(|node| self.word_at(node)).is_some()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// Every word beginning with `prefix`, in alphabetical order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();
        if let Some(start) = self.find(prefix) {
            self.collect(start, &mut words);
        }
        words
    }

    fn collect(&self, node: NodeId, words: &mut Vec<String>) {
        if let Some(word) = self.word_at(node) {
            words.push(word.to_string());
        }
        for child in self.nodes[node].children.iter().flatten() {
            self.collect(*child, words);
        }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

/// Reports each word of a trie at most once over one search.
///
/// This replaces clearing the terminal word on a match: the trie stays
/// intact and a fresh matcher starts a fresh search.
#[derive(Debug)]
pub struct Matcher<'t> {
    trie: &'t Trie,
    reported: Vec<bool>,
}

impl<'t> Matcher<'t> {
    pub fn new(trie: &'t Trie) -> Self {
        Self {
            trie,
            reported: vec![false; trie.node_count()],
        }
    }

    pub fn trie(&self) -> &'t Trie {
        self.trie
    }

    /// Descend from `node` along `symbol`.
    pub fn descend(&self, node: NodeId, symbol: char) -> Option<NodeId> {
        self.trie.step(node, symbol)
    }

    /// The word ending at `node`, the first time it is reached.
    pub fn match_and_consume(&mut self, node: NodeId) -> Option<&'t str> {
        let word = self.trie.word_at(node)?;
        if std::mem::replace(&mut self.reported[node], true) {
            None
        } else {
            Some(word)
        }
    }

    /// Forget what has been reported.
    pub fn reset(&mut self) {
        self.reported.fill(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut trie = Trie::new();
        assert_eq!(trie.insert("oath"), Ok(true));
        assert_eq!(trie.insert("oat"), Ok(true));
        assert_eq!(trie.insert("oath"), Ok(false));

        assert!(trie.contains("oath"));
        assert!(trie.contains("oat"));
        assert!(!trie.contains("oa"));
        assert!(trie.starts_with("oa"));
        assert!(!trie.starts_with("ob"));
        assert_eq!(trie.len(), 2);
        // root + o, a, t, h
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn test_shared_prefixes_do_not_overwrite() {
        let trie = Trie::from_words(["cat", "car", "cart"]);
        assert!(trie.contains("cat"));
        assert!(trie.contains("car"));
        assert!(trie.contains("cart"));
        assert_eq!(trie.words_with_prefix("ca"), vec!["car", "cart", "cat"]);
    }

    #[test]
    fn test_invalid_words_left_out() {
        let mut trie = Trie::new();
        assert_eq!(trie.insert("Oath"), Err(SearchError::InvalidSymbol('O')));
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.insert(""), Ok(false));

        let trie = Trie::from_words(["pea", "r4in", ""]);
        assert_eq!(trie.len(), 1);
        assert!(!trie.contains("r4in"));
    }

    #[test]
    fn test_word_at_stores_whole_word() {
        let trie = Trie::from_words(["eat"]);
        let node = trie.find("eat").unwrap();
        assert_eq!(trie.word_at(node), Some("eat"));
        assert!(trie.is_leaf(node));
        assert!(!trie.is_leaf(Trie::ROOT));
    }

    #[test]
    fn test_matcher_reports_once_and_keeps_trie() {
        let trie = Trie::from_words(["eat"]);
        let node = trie.find("eat").unwrap();

        let mut matcher = Matcher::new(&trie);
        assert_eq!(matcher.match_and_consume(node), Some("eat"));
        assert_eq!(matcher.match_and_consume(node), None);
        assert_eq!(matcher.match_and_consume(Trie::ROOT), None);

        matcher.reset();
        assert_eq!(matcher.match_and_consume(node), Some("eat"));

        let mut fresh = Matcher::new(&trie);
        assert_eq!(fresh.match_and_consume(node), Some("eat"));
        assert!(trie.contains("eat"));
    }
}
