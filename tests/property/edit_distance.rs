//! Edit distance against independent implementations, and the fuzzy matcher
//! against a full vocabulary scan.

use super::common::word_catalog;
use super::oracles::{oracle_fuzzy_words, oracle_levenshtein};
use folio::fuzzy::{distance, distance_within};
use folio::search::fuzzy::{length_window, match_terms};
use folio::search::SearchSession;
use folio::util::length_of;
use folio::SearchConfig;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{0,8}").unwrap()
}

fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[aéöß漢字]{0,6}").unwrap()
}

proptest! {
    #[test]
    fn prop_distance_matches_strsim(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_distance_counts_characters(a in unicode_word_strategy(), b in unicode_word_strategy()) {
        prop_assert_eq!(distance(&a, &b), oracle_levenshtein(&a, &b));
    }

    #[test]
    fn prop_distance_is_symmetric(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn prop_triangle_inequality(a in word_strategy(), b in word_strategy(), c in word_strategy()) {
        prop_assert!(distance(&a, &c) <= distance(&a, &b) + distance(&b, &c));
    }

    #[test]
    fn prop_bounded_agrees_with_full(a in word_strategy(), b in word_strategy(), max in 0usize..4) {
        let full = distance(&a, &b);
        let expected = (full <= max).then_some(full);
        prop_assert_eq!(distance_within(&a, &b, max), expected);
    }

    /// Nothing within the edit budget falls outside the length window.
    #[test]
    fn prop_window_keeps_every_candidate(
        words in prop::collection::btree_set(prop::string::string_regex("[a-c]{1,10}").unwrap(), 1..40),
        term in prop::string::string_regex("[a-c]{1,10}").unwrap(),
        max in 0usize..3,
    ) {
        let mut source: Vec<String> = words.into_iter().collect();
        source.sort_by(|a, b| length_of(a).cmp(&length_of(b)).then_with(|| a.cmp(b)));
        let window = length_window(&source, length_of(&term), max);
        for word in &source {
            if distance(word, &term) <= max {
                prop_assert!(window.contains(word), "{} missing from window for {}", word, term);
            }
        }
    }

    /// Below the result cap, fuzzy matching finds exactly what a full scan does.
    #[test]
    fn prop_fuzzy_matches_full_scan(
        words in prop::collection::btree_set(prop::string::string_regex("[a-d]{2,7}").unwrap(), 1..30),
        terms in prop::collection::vec(prop::string::string_regex("[a-d]{2,7}").unwrap(), 1..3),
    ) {
        let vocabulary: Vec<String> = words.into_iter().collect();
        let entries: Vec<(&str, &[&str])> = vocabulary.iter().map(|w| (w.as_str(), &["1"][..])).collect();
        let catalog = word_catalog(&entries);
        let config = SearchConfig { max_result_count: 1000, ..SearchConfig::default() };

        let mut session = SearchSession::default();
        let buckets = match_terms(&catalog, terms.as_slice(), &config, &mut session);
        let found: BTreeSet<String> = buckets
            .iter()
            .flat_map(|(_, words)| words.iter().cloned())
            .collect();

        prop_assert_eq!(found, oracle_fuzzy_words(vocabulary.as_slice(), terms.as_slice(), config.max_edit_distance));
    }
}
