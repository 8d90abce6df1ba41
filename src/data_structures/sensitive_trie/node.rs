// Copyright (c) 2025 Kapu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Sensitive Trie.
//!
//! Each node owns its children by value, so the whole tree is released
//! when the root is dropped. Nodes carry no synchronization of their own;
//! the owning [`SensitiveTrie`](super::SensitiveTrie) guards the tree.

use fnv::FnvHashMap;

/// A node in the Sensitive Trie.
///
/// Each edge out of a node is labelled with one `char`. A node is terminal
/// when an inserted word ends on it, in which case `word` holds that word
/// exactly as it was given.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Map of characters to owned child nodes
    children: FnvHashMap<char, TrieNode>,

    /// The complete word ending at this node, if any
    word: Option<String>,
}

impl TrieNode {
    /// Creates a new empty, non-terminal node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached by `c`, or `None` if there is no such edge.
    #[inline]
    pub fn find_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Returns the child reached by `c`, creating an empty one if needed.
    ///
    /// Calling this twice with the same `c` yields the same node; any
    /// terminal state already on that node is left untouched.
    pub fn add_child(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }

    /// Whether a word ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.word.is_some()
    }

    /// The word ending at this node.
    #[inline]
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Marks this node terminal for `word`, replacing any previous spelling.
    pub fn set_word(&mut self, word: impl Into<String>) {
        self.word = Some(word.into());
    }

    /// Whether this node has no outgoing edges.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Counts the terminal nodes in the subtree rooted here, this node included.
    pub fn count_terminals(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.is_terminal() {
                count += 1;
            }
            stack.extend(node.children.values());
        }

        count
    }
}
