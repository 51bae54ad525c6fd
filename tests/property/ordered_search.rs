//! Binary searches agree with a linear scan.

use super::oracles::{oracle_contains, oracle_first_of_length};
use folio::search::ordered::first_index_with_length_at_least;
use folio::search::{binary_search, binary_search_by_first_length_match};
use folio::util::length_of;
use folio::Lookup;
use proptest::prelude::*;

/// Sorted, deduplicated integers.
fn sorted_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::btree_set(-500i32..500, 0..64).prop_map(|set| set.into_iter().collect())
}

/// Words sorted by character length, the way the catalog keeps its vocabulary.
fn length_sorted_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(prop::string::string_regex("[a-z0-9]{1,12}").unwrap(), 0..48)
        .prop_map(|set| {
            let mut words: Vec<String> = set.into_iter().collect();
            words.sort_by(|a, b| length_of(a).cmp(&length_of(b)).then_with(|| a.cmp(b)));
            words
        })
}

proptest! {
    #[test]
    fn prop_membership_matches_scan(values in sorted_values(), target in -600i32..600) {
        let expected = Lookup::from(oracle_contains(&values, &target));
        prop_assert_eq!(binary_search(&values, &target), expected);
    }

    #[test]
    fn prop_every_present_value_is_found(values in sorted_values()) {
        for value in &values {
            prop_assert!(binary_search(&values, value).is_found());
        }
    }

    #[test]
    fn prop_first_length_match_is_leftmost(words in length_sorted_words(), length in 0usize..15) {
        prop_assert_eq!(
            binary_search_by_first_length_match(&words, length),
            oracle_first_of_length(&words, length)
        );
    }

    #[test]
    fn prop_first_at_least_skips_shorter(words in length_sorted_words(), length in 0usize..15) {
        let expected = words.iter().position(|w| length_of(w) >= length);
        prop_assert_eq!(first_index_with_length_at_least(&words, length), expected);
    }
}
