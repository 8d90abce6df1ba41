//! Data structures for Kapu.
//!
//! This module contains the matching structures used to detect sensitive
//! words. All implementations adhere to the project requirements:
//! - No unsafe code
//! - Safe concurrent reads with explicit, coarse-grained locking
//! - Unicode-correct processing at `char` granularity

pub mod sensitive_trie;

// Re-export common data structures
pub use sensitive_trie::{SensitiveTrie, TrieConfig, TrieNode, WordMatch};
