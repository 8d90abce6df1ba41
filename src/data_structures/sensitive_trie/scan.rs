// Copyright (c) 2025 Kapu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Walks the trie along a run of text starting at a fixed position.

use std::iter::FusedIterator;

use super::node::TrieNode;

/// Iterator over every word that starts at a given text position.
///
/// Yields `(word, end)` pairs where `end` is the exclusive char index at
/// which the word ends. Words are produced shortest first, and the walk
/// stops as soon as a transition is missing or the text runs out.
#[derive(Debug)]
pub(crate) struct PrefixWalk<'a> {
    node: Option<&'a TrieNode>,
    chars: &'a [char],
    pos: usize,
}

impl<'a> PrefixWalk<'a> {
    pub(crate) fn new(root: &'a TrieNode, chars: &'a [char], start: usize) -> Self {
        Self {
            node: Some(root),
            chars,
            pos: start,
        }
    }
}

impl<'a> Iterator for PrefixWalk<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let c = *self.chars.get(self.pos)?;
            let next = self.node?.find_child(c);
            self.node = next;

            let node = next?;
            self.pos += 1;
            if let Some(word) = node.word() {
                return Some((word, self.pos));
            }
        }
    }
}

impl FusedIterator for PrefixWalk<'_> {}
