// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance between two words.
//!
//! Insertions, deletions and substitutions all cost 1. Lengths are measured
//! in characters, so "café" and "cafe" are one substitution apart, not two.
//!
//! Two entry points:
//! - `distance` fills the whole (n+1)×(m+1) table and always answers.
//! - `distance_within` answers only when the result is at most `max`, and
//!   bails out early otherwise. The fuzzy matcher uses this one: almost every
//!   vocabulary word is far from the query, and most of those are rejected
//!   before the table is half built.

/// Levenshtein distance between `a` and `b`.
///
/// ```
/// use folio::fuzzy::distance;
///
/// assert_eq!(distance("kitten", "sitting"), 3);
/// assert_eq!(distance("", "abc"), 3);
/// ```
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let width = b.len() + 1;

    // Row i, column j holds the distance between a[..i] and b[..j].
    let mut matrix = vec![0usize; (a.len() + 1) * width];
    for i in 0..=a.len() {
        matrix[i * width] = i;
    }
    for j in 0..=b.len() {
        matrix[j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let deletion = matrix[(i - 1) * width + j] + 1;
            let insertion = matrix[i * width + j - 1] + 1;
            let substitution = matrix[(i - 1) * width + j - 1] + cost;
            matrix[i * width + j] = deletion.min(insertion).min(substitution);
        }
    }

    matrix[a.len() * width + b.len()]
}

/// The distance between `a` and `b` if it is at most `max`, otherwise `None`.
///
/// Two early exits, both sound:
/// 1. `|len(a) - len(b)|` is a lower bound on the distance.
/// 2. Once every cell of a DP row exceeds `max`, later rows only grow.
pub fn distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != *bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
            row_min = row_min.min(row[j + 1]);
        }

        if row_min > max {
            return None;
        }
    }

    Some(row[b_len]).filter(|d| *d <= max)
}
