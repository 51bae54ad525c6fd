//! Relevance ranking is a permutation of the union, ordered by how many
//! sets each item appears in.

use super::oracles::{oracle_closest_distance, oracle_membership_counts};
use folio::scoring::{rank_by_combinations, rank_by_membership};
use folio::{order_by_distance, rank, DistanceBuckets, WordIndex};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

fn sets_strategy() -> impl Strategy<Value = Vec<BTreeSet<u8>>> {
    prop::collection::vec(prop::collection::btree_set(0u8..24, 0..12), 0..5)
}

fn word_index_strategy() -> impl Strategy<Value = WordIndex> {
    prop::collection::btree_map(
        "[a-e]{2,4}",
        prop::collection::btree_set("[0-9]{2}", 1..5),
        1..12,
    )
}

/// A word index plus a distance assignment for a random subset of its words.
fn buckets_strategy() -> impl Strategy<Value = (WordIndex, Vec<(usize, String)>)> {
    word_index_strategy().prop_flat_map(|index| {
        let words: Vec<String> = index.keys().cloned().collect();
        let picks = prop::collection::vec((0usize..3, prop::sample::select(words)), 1..10);
        (Just(index), picks)
    })
}

proptest! {
    #[test]
    fn prop_rank_is_permutation_of_union(sets in sets_strategy()) {
        let ranked = rank(&sets);
        let union: BTreeSet<u8> = sets.iter().flatten().copied().collect();
        let unique: BTreeSet<u8> = ranked.iter().copied().collect();
        prop_assert_eq!(unique.len(), ranked.len(), "duplicates in {:?}", ranked);
        prop_assert_eq!(unique, union);
    }

    #[test]
    fn prop_rank_orders_by_membership(sets in sets_strategy()) {
        let counts = oracle_membership_counts(&sets);
        let ranked = rank(&sets);
        for pair in ranked.windows(2) {
            prop_assert!(
                counts[&pair[0]] >= counts[&pair[1]],
                "{} (in {}) ranked before {} (in {})",
                pair[0], counts[&pair[0]], pair[1], counts[&pair[1]]
            );
        }
    }

    #[test]
    fn prop_rank_ignores_set_order(mut sets in sets_strategy()) {
        let forward = rank(&sets);
        sets.reverse();
        prop_assert_eq!(rank(&sets), forward);
    }

    #[test]
    fn prop_ranking_paths_agree(sets in prop::collection::vec(prop::collection::btree_set(0u8..24, 0..12), 0..7)) {
        let refs: Vec<&BTreeSet<u8>> = sets.iter().collect();
        prop_assert_eq!(rank_by_combinations(&refs), rank_by_membership(&refs));
    }

    #[test]
    fn prop_order_by_distance_tiers((index, picks) in buckets_strategy()) {
        let mut buckets = DistanceBuckets::new(2);
        for (distance, word) in &picks {
            buckets.insert(*distance, word.as_str());
        }
        let ordered = order_by_distance(&buckets, &index);

        let unique: BTreeSet<&String> = ordered.iter().collect();
        prop_assert_eq!(unique.len(), ordered.len(), "duplicates in {:?}", ordered);

        let closest: BTreeMap<String, usize> = oracle_closest_distance(&picks, &index);
        let expected: BTreeSet<&String> = closest.keys().collect();
        prop_assert_eq!(unique, expected);

        for pair in ordered.windows(2) {
            prop_assert!(
                closest[&pair[0]] <= closest[&pair[1]],
                "{} (distance {}) placed before {} (distance {})",
                pair[0], closest[&pair[0]], pair[1], closest[&pair[1]]
            );
        }
    }
}
