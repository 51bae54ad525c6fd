// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for cross-term relevance ranking.
//!
//! Whatever the sets, the ranked output holds every item of their union
//! exactly once, ordered by how many sets contain it.

#![no_main]

use arbitrary::Arbitrary;
use folio::rank;
use libfuzzer_sys::fuzz_target;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Arbitrary)]
struct RankInput {
    sets: Vec<Vec<u8>>,
}

fuzz_target!(|input: RankInput| {
    // Combination tiers grow quickly with the set count
    let sets: Vec<BTreeSet<u8>> = input
        .sets
        .into_iter()
        .take(7)
        .map(|items| items.into_iter().take(32).collect())
        .collect();

    let ranked = rank(&sets);

    let union: BTreeSet<u8> = sets.iter().flatten().copied().collect();
    let unique: BTreeSet<u8> = ranked.iter().copied().collect();
    assert_eq!(unique.len(), ranked.len(), "duplicate in {:?}", ranked);
    assert_eq!(unique, union);

    let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
    for item in sets.iter().flatten() {
        *counts.entry(*item).or_default() += 1;
    }
    for pair in ranked.windows(2) {
        assert!(counts[&pair[0]] >= counts[&pair[1]], "out of order: {:?}", ranked);
    }
});
