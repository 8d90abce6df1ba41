// Copyright (c) 2025 Kapu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit, property-based and concurrency tests for the Sensitive Trie.


use test_case::test_case;

use super::*;

#[test]
fn test_trie_basic_operations() {
    let trie = SensitiveTrie::new();

    // Test initial state
    assert!(trie.is_empty());
    assert_eq!(trie.count_words(), 0);
    assert!(trie.match_text("anything at all").is_empty());

    // Test insertion
    assert!(trie.add_word("bad"));
    assert_eq!(trie.count_words(), 1);
    assert!(!trie.is_empty());

    // Test matching
    assert_eq!(trie.match_text("too bad"), vec!["bad"]);
    assert!(trie.contains_match("too bad"));
    assert!(!trie.contains_match("too good"));
}

#[test]
fn test_example_sentence() {
    let trie = SensitiveTrie::from_words(["bad", "word", "abc"]);

    let found = trie.match_text("this is a bad word with abc");
    assert_eq!(found, vec!["bad", "word", "abc"]);
}

#[test_case(&["ab", "abc"], "xabcx", &["ab", "abc"] ; "nested words share a start")]
#[test_case(&["bad"], "go bad", &["bad"] ; "word ends on last char")]
#[test_case(&["bad"], "bad", &["bad"] ; "word is the whole text")]
#[test_case(&["a"], "a", &["a"] ; "single char text")]
#[test_case(&["bad"], "ba", &[] ; "text shorter than word")]
#[test_case(&["abc", "bcd"], "abcd", &["abc", "bcd"] ; "overlap at different starts")]
#[test_case(&["bad"], "bad bad bad", &["bad"] ; "repeats reported once")]
#[test_case(&["cd", "abcd"], "abcd", &["abcd", "cd"] ; "order follows start position")]
#[test_case(&["敏感", "感词"], "这是敏感词", &["敏感", "感词"] ; "multibyte chars")]
#[test_case(&["🦀"], "rust 🦀!", &["🦀"] ; "four byte char")]
#[test_case(&["word"], "", &[] ; "empty text")]
fn test_match_text(words: &[&str], text: &str, expected: &[&str]) {
    let trie = SensitiveTrie::from_words(words);
    assert_eq!(trie.match_text(text), expected);
}

#[test]
fn test_duplicate_insertion_is_idempotent() {
    let once = SensitiveTrie::from_words(["bad", "word"]);
    let twice = SensitiveTrie::from_words(["bad", "word"]);
    twice.add_word("bad");
    twice.add_words(["word", "bad"]);

    assert_eq!(once.count_words(), twice.count_words());
    assert_eq!(twice.count_words(), 2);

    let text = "bad word, bad words";
    assert_eq!(once.match_text(text), twice.match_text(text));
}

#[test]
fn test_prefix_of_word_is_not_a_match() {
    let trie = SensitiveTrie::from_words(["abcd"]);
    assert!(trie.match_text("abc abd bcd").is_empty());
    assert!(!trie.contains_match("abc"));
}

#[test]
fn test_empty_words_are_skipped() {
    let trie = SensitiveTrie::new();
    assert!(!trie.add_word(""));
    assert_eq!(trie.add_words(["", "bad", ""]), 1);

    assert_eq!(trie.count_words(), 1);
    assert!(trie.match_text("nothing here").is_empty());
}

#[test]
fn test_refresh_replaces_word_set() {
    let trie = SensitiveTrie::from_words(["old", "stale"]);
    assert_eq!(trie.match_text("old and stale"), vec!["old", "stale"]);

    assert_eq!(trie.refresh(["new", "fresh"]), 2);
    assert_eq!(trie.count_words(), 2);
    assert!(trie.match_text("old and stale").is_empty());
    assert_eq!(trie.match_text("old new fresh"), vec!["new", "fresh"]);

    // Words survive a refresh only when re-included
    trie.refresh(["fresh", "old"]);
    assert_eq!(trie.match_text("old new fresh"), vec!["old", "fresh"]);
}

#[test]
fn test_clear() {
    let trie = SensitiveTrie::from_words(["bad"]);
    trie.clear();

    assert!(trie.is_empty());
    assert!(trie.match_text("bad").is_empty());
}

#[test]
fn test_count_words_ignores_intermediate_nodes() {
    let trie = SensitiveTrie::from_words(["a", "ab", "abc", "xyz"]);
    assert_eq!(trie.count_words(), 4);
}

#[test]
fn test_find_matches_reports_every_occurrence() {
    let trie = SensitiveTrie::from_words(["ab", "abc", "bc"]);

    let matches = trie.find_matches("abc-abc");
    let spans: Vec<(&str, usize, usize)> = matches
        .iter()
        .map(|m| (m.word.as_str(), m.start, m.end))
        .collect();

    assert_eq!(
        spans,
        vec![
            ("ab", 0, 2),
            ("abc", 0, 3),
            ("bc", 1, 3),
            ("ab", 4, 6),
            ("abc", 4, 7),
            ("bc", 5, 7),
        ]
    );
}

#[test]
fn test_find_matches_uses_char_positions() {
    let trie = SensitiveTrie::from_words(["感"]);
    let matches = trie.find_matches("敏感");

    assert_eq!(
        matches,
        vec![WordMatch {
            word: "感".to_string(),
            start: 1,
            end: 2,
        }]
    );
}

#[test_case(&["bad"], "so bad!", "so ***!" ; "single word")]
#[test_case(&["ab", "abcd"], "xabcdx", "x****x" ; "longest word wins")]
#[test_case(&["abc", "cde"], "abcdef", "*****f" ; "overlapping words merge")]
#[test_case(&["敏感"], "敏感词", "**词" ; "multibyte chars")]
#[test_case(&["bad"], "all good", "all good" ; "nothing to mask")]
fn test_mask(words: &[&str], text: &str, expected: &str) {
    let trie = SensitiveTrie::from_words(words);
    assert_eq!(trie.mask(text, '*'), expected);
}

#[test]
fn test_case_insensitive_matching() {
    let trie = SensitiveTrie::with_config(TrieConfig::new().case_sensitive(false));
    trie.add_words(["Bad", "WORD"]);

    // Stored words keep the spelling they were inserted with
    assert_eq!(trie.match_text("BAD Word"), vec!["Bad", "WORD"]);
    assert_eq!(trie.mask("BAD Word", '#'), "### ####");

    // A later spelling of the same folded word replaces the stored one
    trie.add_word("bAd");
    assert_eq!(trie.count_words(), 2);
    assert_eq!(trie.match_text("bad"), vec!["bAd"]);
}

#[test]
fn test_case_sensitive_by_default() {
    let trie = SensitiveTrie::from_words(["bad"]);
    assert!(trie.match_text("BAD").is_empty());
}

#[test]
fn test_trim_words() {
    let trie = SensitiveTrie::with_config(TrieConfig::new().trim_words(true));
    assert_eq!(trie.add_words(["  bad\n", "\tword ", "   "]), 2);
    assert_eq!(trie.match_text("bad word"), vec!["bad", "word"]);

    // Without trimming the surrounding whitespace is part of the word
    let untrimmed = SensitiveTrie::from_words([" bad "]);
    assert!(untrimmed.match_text("bad").is_empty());
    assert_eq!(untrimmed.match_text("so bad !"), vec![" bad "]);
}

#[test]
fn test_max_word_chars() {
    let trie = SensitiveTrie::with_config(TrieConfig::new().max_word_chars(3));
    assert!(trie.add_word("bad"));
    assert!(trie.add_word("敏感词"));
    assert!(!trie.add_word("worse"));

    assert_eq!(trie.count_words(), 2);
    assert_eq!(trie.match_text("bad worse"), vec!["bad"]);
}
