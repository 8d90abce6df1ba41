//! Test modules for Kapu.
//!
//! This module contains the crate-level test suite:
//! - Unit tests for configuration and errors
//! - Word source tests with mocked and file-backed sources
//! - Property-based tests using proptest
//! - Test fixtures and utilities
//!
//! Tests for the trie itself live next to it in
//! `data_structures::sensitive_trie::tests`.


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_strategy, MockSource, TestFixture};
