// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning free text into search tokens.
//!
//! The pipeline, in order:
//!
//! 1. Trim surrounding whitespace
//! 2. Fold diacritics (when `unicode-normalization` is on)
//! 3. Drop every character that is not an ASCII letter, digit or space
//! 4. Lowercase and split on whitespace
//! 5. Drop single-character words and stop words
//! 6. Truncate what survives to the token length limit
//!
//! Filtering happens before truncation, so a long word is judged on its full
//! spelling and only then cut down.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use super::normalize::{fold_diacritics, strip_special};
use crate::config::MAX_TOKEN_LENGTH;

/// English, Spanish, German and French stop words from data/stop_words.json.
///
/// Entries are folded the same way query text is, so "más" is matched by the
/// token "mas" when diacritic folding is enabled.
static STOP_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    let json_str = include_str!("../../data/stop_words.json");
    parse_stop_words_json(json_str)
});

/// Flatten `{ "language": ["word", ...], ... }` into one set.
fn parse_stop_words_json(json_str: &str) -> HashSet<String> {
    let languages: BTreeMap<String, Vec<String>> =
        serde_json::from_str(json_str).expect("embedded stop word list is valid JSON");
    languages
        .into_values()
        .flatten()
        .map(|word| fold_diacritics(&word).to_lowercase())
        .collect()
}

/// Check if an already-normalized word is a stop word.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Normalize text into search tokens with the default length limit.
///
/// ```
/// use folio::util::prepare;
///
/// let tokens = prepare("  The q@uick brown! FOX jumps _over the lazy dog  ");
/// assert_eq!(tokens, ["quick", "brown", "fox", "jumps", "lazy", "dog"]);
/// ```
pub fn prepare(text: &str) -> Vec<String> {
    prepare_with_limit(text, MAX_TOKEN_LENGTH)
}

/// Normalize text into search tokens, truncating each to `max_token_length`
/// characters. Empty or whitespace-only input yields no tokens.
pub fn prepare_with_limit(text: &str, max_token_length: usize) -> Vec<String> {
    let cleaned = strip_special(&fold_diacritics(text.trim())).to_lowercase();
    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() > 1 && !is_stop_word(word))
        .map(|word| word.chars().take(max_token_length).collect())
        .collect()
}
