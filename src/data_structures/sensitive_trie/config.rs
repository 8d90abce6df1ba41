// Copyright (c) 2025 Kapu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Sensitive Trie.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// Configuration for the Sensitive Trie.
///
/// The defaults insert and match words exactly as given: case-sensitive,
/// untrimmed and without a length limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieConfig {
    /// Whether words and text are compared case-sensitively
    pub case_sensitive: bool,

    /// Whether surrounding whitespace is trimmed from words before insertion
    pub trim_words: bool,

    /// Maximum word length in chars; longer words are skipped
    pub max_word_chars: Option<usize>,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            trim_words: false,
            max_word_chars: None,
        }
    }
}

impl TrieConfig {
    /// Creates a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether matching should be case-sensitive.
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }

    /// Sets whether words are trimmed before insertion.
    pub fn trim_words(mut self, value: bool) -> Self {
        self.trim_words = value;
        self
    }

    /// Sets the maximum word length in chars.
    pub fn max_word_chars(mut self, value: usize) -> Self {
        self.max_word_chars = Some(value);
        self
    }

    /// Maps a char onto the alphabet the trie is keyed by.
    ///
    /// Case folding only applies when the lowercase form is a single char,
    /// which keeps text positions aligned one-to-one with trie edges.
    #[inline]
    pub(crate) fn fold(&self, c: char) -> char {
        if self.case_sensitive {
            return c;
        }
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) => l,
            _ => c,
        }
    }
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_chars == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_word_chars must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
