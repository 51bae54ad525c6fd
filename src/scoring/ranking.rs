// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Overlap ranking across match sets.
//!
//! Given one set of candidates per matched word, a candidate in every set beats
//! a candidate in all but one, which beats one in all but two, and so on down
//! to candidates found by a single set. Tiers are built from k-combinations
//! of the input sets for k = n-1 down to 2, with the full intersection on top
//! and the leftover union at the bottom.
//!
//! Within a tier, candidates come out in ascending order. Every candidate
//! appears exactly once, at its highest tier.
//!
//! Cost is exponential in the number of sets (2^n - n - 1 combinations).
//! Contains search passes one set per matched word, so a short fragment can
//! bring hundreds of sets. Past `COMBINATION_LIMIT` sets the tiers are read
//! off per-candidate membership counts instead, which yields the same order:
//! a candidate sits in some k-combination's intersection exactly when at
//! least k sets hold it.

use std::borrow::Borrow;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use crate::types::{DistanceBuckets, Isbn, IsbnSet, WordIndex};

/// Rank candidates by how many of `sets` contain them.
///
/// ```
/// use folio::scoring::rank;
/// use std::collections::BTreeSet;
///
/// let a = BTreeSet::from([1, 2, 3]);
/// let b = BTreeSet::from([2, 3, 4]);
/// let c = BTreeSet::from([3, 5]);
/// assert_eq!(rank(&[a, b, c]), vec![3, 2, 1, 4, 5]);
/// ```
pub fn rank<T, S>(sets: &[S]) -> Vec<T>
where
    T: Ord + Clone,
    S: Borrow<BTreeSet<T>>,
{
    let sets: Vec<&BTreeSet<T>> = sets.iter().map(Borrow::borrow).collect();
    if sets.len() > COMBINATION_LIMIT {
        return rank_by_membership(&sets);
    }
    rank_by_combinations(&sets)
}

/// Largest number of sets ranked by enumerating combinations.
pub const COMBINATION_LIMIT: usize = 12;

/// Tiered ranking by explicit k-combination intersections.
pub fn rank_by_combinations<T: Ord + Clone>(sets: &[&BTreeSet<T>]) -> Vec<T> {
    let Some((first, rest)) = sets.split_first() else {
        return Vec::new();
    };

    let mut emitted: BTreeSet<T> = BTreeSet::new();
    let mut ranked = Vec::new();

    // Top tier: in every set.
    for item in first.iter().filter(|item| rest.iter().all(|set| set.contains(*item))) {
        emitted.insert(item.clone());
        ranked.push(item.clone());
    }

    // Middle tiers: in some k of the sets, largest k first.
    for k in (2..sets.len()).rev() {
        let mut tier = BTreeSet::new();
        for combination in Combinations::new(sets.len(), k) {
            let Some((head, tail)) = combination.split_first() else {
                continue;
            };
            for item in sets[*head].iter() {
                if !emitted.contains(item) && tail.iter().all(|&i| sets[i].contains(item)) {
                    tier.insert(item.clone());
                }
            }
        }
        for item in tier {
            emitted.insert(item.clone());
            ranked.push(item);
        }
    }

    // Bottom tier: in at least one set.
    let rest: BTreeSet<&T> = sets
        .iter()
        .flat_map(|set| set.iter())
        .filter(|item| !emitted.contains(*item))
        .collect();
    ranked.extend(rest.into_iter().cloned());
    ranked
}

/// Tiered ranking by how many sets hold each candidate. Linear in the total
/// size of `sets`.
pub fn rank_by_membership<T: Ord + Clone>(sets: &[&BTreeSet<T>]) -> Vec<T> {
    let mut counts: BTreeMap<&T, usize> = BTreeMap::new();
    for item in sets.iter().flat_map(|set| set.iter()) {
        *counts.entry(item).or_default() += 1;
    }
    let mut ranked: Vec<(&T, usize)> = counts.into_iter().collect();
    // Stable: ascending candidate order survives within a tier.
    ranked.sort_by_key(|&(_, count)| Reverse(count));
    ranked.into_iter().map(|(item, _)| item.clone()).collect()
}

/// Order fuzzy matches: exact words first, then one edit away, then two.
///
/// Distance-0 words go through `rank`, so a book matching several query terms
/// exactly comes first. Higher buckets are appended in the order their words
/// were accepted, each word's ISBNs ascending. An ISBN already placed is not
/// repeated.
pub fn order_by_distance(buckets: &DistanceBuckets, index: &WordIndex) -> Vec<Isbn> {
    let mut placed: BTreeSet<Isbn> = BTreeSet::new();
    let mut ordered = Vec::new();

    for (distance, words) in buckets.iter() {
        let sets: Vec<&IsbnSet> = words.iter().filter_map(|word| index.get(word)).collect();
        let candidates: Vec<Isbn> = if distance == 0 {
            rank(&sets)
        } else {
            sets.into_iter().flatten().cloned().collect()
        };
        for isbn in candidates {
            if placed.insert(isbn.clone()) {
                ordered.push(isbn);
            }
        }
    }
    ordered
}

/// Lexicographic k-combinations of `0..n`.
struct Combinations {
    n: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            exhausted: k == 0 || k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.exhausted {
            return None;
        }
        let current = self.indices.clone();

        // Bump the rightmost index that still has room, reset everything after it.
        let k = self.indices.len();
        match (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.exhausted = true,
        }
        Some(current)
    }
}
