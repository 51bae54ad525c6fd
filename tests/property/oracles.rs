//! Reference oracles for differential testing.
//!
//! Simple linear or textbook implementations. Slow, but there is nowhere for
//! a bug to hide.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use folio::util::length_of;

/// Linear membership scan.
pub fn oracle_contains<T: PartialEq>(source: &[T], target: &T) -> bool {
    source.iter().any(|value| value == target)
}

/// Position of the first word with exactly `length` characters.
pub fn oracle_first_of_length<S: AsRef<str>>(source: &[S], length: usize) -> Option<usize> {
    source.iter().position(|word| length_of(word.as_ref()) == length)
}

/// Classic Levenshtein edit distance, Wagner-Fischer with two rows.
pub fn oracle_levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, c1) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, c2) in b.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Every vocabulary word within `max` edits of some term.
pub fn oracle_fuzzy_words<S: AsRef<str>>(vocabulary: &[S], terms: &[S], max: usize) -> BTreeSet<String> {
    vocabulary
        .iter()
        .filter(|word| {
            terms
                .iter()
                .any(|term| oracle_levenshtein(word.as_ref(), term.as_ref()) <= max)
        })
        .map(|word| word.as_ref().to_string())
        .collect()
}

/// How many of `sets` contain each item.
pub fn oracle_membership_counts<T: Ord + Clone>(sets: &[BTreeSet<T>]) -> BTreeMap<T, usize> {
    let mut counts = BTreeMap::new();
    for set in sets {
        for item in set {
            *counts.entry(item.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Smallest distance at which each ISBN was reached through a bucketed word.
pub fn oracle_closest_distance(
    picks: &[(usize, String)],
    index: &BTreeMap<String, BTreeSet<String>>,
) -> BTreeMap<String, usize> {
    let mut closest: BTreeMap<String, usize> = BTreeMap::new();
    for (distance, word) in picks {
        for isbn in index.get(word).into_iter().flatten() {
            let entry = closest.entry(isbn.clone()).or_insert(*distance);
            *entry = (*entry).min(*distance);
        }
    }
    closest
}
