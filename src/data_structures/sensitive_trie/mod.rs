// Copyright (c) 2025 Kapu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Sensitive Trie Implementation
//!
//! This module provides a character trie for detecting sensitive words in
//! arbitrary text. Every registered word occurring anywhere in a text is
//! reported once, overlapping occurrences included.
//!
//! # Example
//!
//! ```
//! use kapu_lib::data_structures::sensitive_trie::SensitiveTrie;
//!
//! let trie = SensitiveTrie::new();
//! trie.add_words(["bad", "word", "abc"]);
//!
//! let found = trie.match_text("this is a bad word with abc");
//! assert_eq!(found, vec!["bad", "word", "abc"]);
//!
//! // Replace the whole word set at once
//! trie.refresh(["good"]);
//! assert!(trie.match_text("this is a bad word").is_empty());
//! ```
//!
//! # Concurrency
//!
//! The tree sits behind a single reader/writer lock. Any number of scans may
//! run in parallel; insertions and refreshes are exclusive. A refresh builds
//! the replacement tree while holding the write lock, so a scan sees either
//! the old word set or the new one, never a mix.

mod config;
mod node;
mod scan;

#[cfg(test)]
mod tests;

use fnv::FnvHashSet;
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::error::KapuResult;
use crate::word_list::WordSource;

pub use config::TrieConfig;
pub use node::TrieNode;
use scan::PrefixWalk;

/// A single occurrence of a sensitive word in a scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordMatch {
    /// The word as it was inserted
    pub word: String,

    /// Char index of the first matched char
    pub start: usize,

    /// Char index one past the last matched char
    pub end: usize,
}

/// Sensitive Trie is a prefix tree of sensitive words, keyed by `char`.
///
/// Key features:
/// * Overlapping multi-word matching in a single pass per start position
/// * Unicode-aware: multi-byte chars are single edges
/// * Thread-safe with one reader/writer lock over the whole tree
/// * Atomic replacement of the full word set
#[derive(Debug, Default)]
pub struct SensitiveTrie {
    /// The root node, representing the empty prefix
    root: RwLock<TrieNode>,

    /// Configuration options
    config: TrieConfig,
}

impl SensitiveTrie {
    /// Creates a new empty `SensitiveTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new empty `SensitiveTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: RwLock::new(TrieNode::new()),
            config,
        }
    }

    /// Creates a trie with default configuration holding `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let trie = Self::new();
        trie.add_words(words);
        trie
    }

    /// Creates a trie and fills it from a word source.
    ///
    /// # Returns
    ///
    /// * `Ok(SensitiveTrie)` - The populated trie.
    /// * `Err(KapuError)` - If the source failed to supply its words.
    pub fn from_source(config: TrieConfig, source: &dyn WordSource) -> KapuResult<Self> {
        let words = source.load_words()?;
        let trie = Self::with_config(config);
        trie.add_words(&words);
        Ok(trie)
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Inserts a single word.
    ///
    /// Inserting a word that is already present has no effect.
    ///
    /// # Returns
    ///
    /// `true` if the word was accepted, `false` if it was skipped for being
    /// empty or longer than the configured limit.
    pub fn add_word(&self, word: impl AsRef<str>) -> bool {
        let mut root = self.root.write();
        self.insert_into(&mut root, word.as_ref())
    }

    /// Inserts a batch of words under a single lock acquisition.
    ///
    /// # Returns
    ///
    /// The number of words accepted.
    pub fn add_words<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = self.root.write();
        let (accepted, skipped) = self.insert_all(&mut root, words);
        debug!(accepted, skipped, "Added sensitive words");
        accepted
    }

    /// Replaces the whole word set with `words`.
    ///
    /// The old tree is discarded and the new one is built while the write lock
    /// is held, so concurrent scans block until the rebuild completes.
    ///
    /// # Returns
    ///
    /// The number of words accepted into the new tree.
    pub fn refresh<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = self.root.write();
        *root = TrieNode::new();
        let (accepted, skipped) = self.insert_all(&mut root, words);
        debug!(accepted, skipped, "Refreshed sensitive word set");
        accepted
    }

    /// Replaces the whole word set with the words supplied by `source`.
    ///
    /// The source is read before the lock is taken. If it fails, the current
    /// word set is kept.
    pub fn refresh_from(&self, source: &dyn WordSource) -> KapuResult<usize> {
        let words = source.load_words()?;
        Ok(self.refresh(&words))
    }

    /// Removes every word.
    pub fn clear(&self) {
        *self.root.write() = TrieNode::new();
    }

    /// Returns the distinct sensitive words found in `text`.
    ///
    /// Words are listed in the order they are first discovered: by start
    /// position, then shortest first for words sharing a start. A word that
    /// occurs several times is reported once.
    pub fn match_text(&self, text: &str) -> Vec<String> {
        let chars = self.decode(text);
        let root = self.root.read();

        let mut seen = FnvHashSet::default();
        let mut found = Vec::new();
        for start in 0..chars.len() {
            for (word, _) in PrefixWalk::new(&root, &chars, start) {
                if seen.insert(word) {
                    found.push(word.to_owned());
                }
            }
        }

        trace!(chars = chars.len(), matched = found.len(), "Scanned text");
        found
    }

    /// Returns whether `text` contains at least one sensitive word.
    ///
    /// Stops at the first match found.
    pub fn contains_match(&self, text: &str) -> bool {
        let chars = self.decode(text);
        let root = self.root.read();

        (0..chars.len()).any(|start| PrefixWalk::new(&root, &chars, start).next().is_some())
    }

    /// Returns every occurrence of every sensitive word in `text`.
    ///
    /// Unlike [`match_text`](Self::match_text), repeated occurrences are all
    /// reported. Positions are char indices, ordered by start then by length.
    pub fn find_matches(&self, text: &str) -> Vec<WordMatch> {
        let chars = self.decode(text);
        let root = self.root.read();

        let mut matches = Vec::new();
        for start in 0..chars.len() {
            matches.extend(
                PrefixWalk::new(&root, &chars, start).map(|(word, end)| WordMatch {
                    word: word.to_owned(),
                    start,
                    end,
                }),
            );
        }
        matches
    }

    /// Returns `text` with every char covered by a sensitive word replaced by `mask`.
    pub fn mask(&self, text: &str, mask: char) -> String {
        let chars = self.decode(text);
        let mut covered = vec![false; chars.len()];
        {
            let root = self.root.read();
            for start in 0..chars.len() {
                // The last word yielded from a start is the longest one
                if let Some((_, end)) = PrefixWalk::new(&root, &chars, start).last() {
                    covered[start..end].fill(true);
                }
            }
        }

        text.chars()
            .zip(covered)
            .map(|(c, hidden)| if hidden { mask } else { c })
            .collect()
    }

    /// Returns the number of distinct words held by the trie.
    ///
    /// This traverses the whole tree, so it's an O(n) operation.
    pub fn count_words(&self) -> usize {
        self.root.read().count_terminals()
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        // Nodes are only ever created on the way to a terminal node
        self.root.read().is_leaf()
    }

    /// Decodes text into the chars the trie is keyed by.
    fn decode(&self, text: &str) -> Vec<char> {
        text.chars().map(|c| self.config.fold(c)).collect()
    }

    /// Applies trimming and length limits, returning the word to insert.
    fn prepare<'w>(&self, word: &'w str) -> Option<&'w str> {
        let word = if self.config.trim_words {
            word.trim()
        } else {
            word
        };

        if word.is_empty() {
            debug!("Skipping empty sensitive word");
            return None;
        }

        if let Some(max) = self.config.max_word_chars {
            let len = word.chars().count();
            if len > max {
                warn!(word, len, max, "Skipping sensitive word over length limit");
                return None;
            }
        }

        Some(word)
    }

    fn insert_into(&self, root: &mut TrieNode, word: &str) -> bool {
        let Some(word) = self.prepare(word) else {
            return false;
        };

        let mut node = root;
        for c in word.chars() {
            node = node.add_child(self.config.fold(c));
        }
        node.set_word(word);
        true
    }

    fn insert_all<I, S>(&self, root: &mut TrieNode, words: I) -> (usize, usize)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted = 0;
        let mut skipped = 0;
        for word in words {
            if self.insert_into(root, word.as_ref()) {
                accepted += 1;
            } else {
                skipped += 1;
            }
        }
        (accepted, skipped)
    }
}
