//! Kapu Library
//!
//! Kapu detects sensitive words in text. The heart of the library is
//! [`SensitiveTrie`](data_structures::SensitiveTrie), a character trie that
//! finds every registered word occurring anywhere in a text and can be
//! refreshed wholesale while other threads keep scanning.
//!
//! # Architecture
//!
//! - `data_structures` holds the trie and never fails or performs I/O
//! - `word_list` supplies words to the trie from files or memory
//! - `scanner` runs scans over many files on worker threads
//! - `config` and `error` carry configuration and the error taxonomy

pub mod config;
pub mod data_structures;
pub mod error;
pub mod scanner;
pub mod word_list;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Kapu.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
