// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a book search.
//!
//! These types describe what the engine reads (books and the inverted indices
//! built over them) and the small vocabulary it uses to talk about a query
//! (its kind, the strategy it was dispatched to, how far a fuzzy match landed).
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **WordIndex**: every value set is non-empty. A term that maps to nothing
//!   should not be in the vocabulary at all.
//! - **YearIndex**: keys are 4-digit year strings, value sets are non-empty.
//! - **SearchSource**: the WordIndex keys sorted ascending by character length.
//!   All length-based binary search depends on this ordering.
//!
//! `Catalog::validate()` checks all of them and reports an `InvariantError`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Book identifier, the primary key for every lookup.
pub type Isbn = String;

/// A set of ISBNs. Ordered so every traversal is deterministic.
pub type IsbnSet = BTreeSet<Isbn>;

/// Normalized token -> ISBNs of the books whose title, author or publisher
/// contain that token.
pub type WordIndex = BTreeMap<String, IsbnSet>;

/// 4-digit year string -> ISBNs of the books published that year.
pub type YearIndex = BTreeMap<String, IsbnSet>;

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// What the catalog knows about one book.
///
/// The ISBN is the key this record is stored under, not a field of it.
/// The engine never mutates a `Book`; it only hands ISBNs back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub publisher: String,
    /// Publication year as written in the source data, usually 4 digits.
    pub year: String,
}

// =============================================================================
// QUERY TYPES
// =============================================================================

/// Outcome of a membership search.
///
/// Deliberately carries no position: callers that need to know *where* a
/// value sits should use the slice APIs instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    MatchFound,
    NotFound,
}

impl Lookup {
    #[inline]
    pub fn is_found(self) -> bool {
        matches!(self, Lookup::MatchFound)
    }
}

impl From<bool> for Lookup {
    fn from(found: bool) -> Self {
        if found {
            Lookup::MatchFound
        } else {
            Lookup::NotFound
        }
    }
}

/// What a prepared query looks like, decided from its tokens alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    /// A single 4-digit token.
    Year,
    /// A single token that is all digits or shaped like an ISBN.
    Isbn,
    /// Anything else that is searchable as words.
    Word,
    /// Nothing searchable. Terminal: no strategy is dispatched.
    Undetermined,
}

/// How WORD queries are matched against the vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordMode {
    /// Substring ("contains") matching.
    Contains,
    /// Edit-distance matching.
    #[default]
    Fuzzy,
}

/// The strategy a query was dispatched to. This is the tag half of a
/// `QueryKey`, so the same tokens searched in two word modes are two
/// separate sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    Year,
    Isbn,
    Contains,
    Fuzzy,
}

impl SearchStrategy {
    /// Map a classified query onto a strategy. `Undetermined` has none.
    pub fn for_kind(kind: QueryKind, mode: WordMode) -> Option<Self> {
        match kind {
            QueryKind::Year => Some(SearchStrategy::Year),
            QueryKind::Isbn => Some(SearchStrategy::Isbn),
            QueryKind::Word => Some(match mode {
                WordMode::Contains => SearchStrategy::Contains,
                WordMode::Fuzzy => SearchStrategy::Fuzzy,
            }),
            QueryKind::Undetermined => None,
        }
    }
}

// =============================================================================
// FUZZY MATCH BUCKETS
// =============================================================================

/// Vocabulary words accepted by fuzzy matching, grouped by exact edit distance.
///
/// Bucket `d` holds the words at distance `d` from some query term, in the
/// order they were accepted. Distances above the configured maximum are
/// rejected on insert, so there are exactly `max_distance + 1` buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceBuckets {
    buckets: Vec<Vec<String>>,
}

impl DistanceBuckets {
    pub fn new(max_distance: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); max_distance + 1],
        }
    }

    /// Largest distance this instance accepts.
    pub fn max_distance(&self) -> usize {
        self.buckets.len() - 1
    }

    /// Add `word` to the bucket for `distance`. Returns false (and drops the
    /// word) if the distance is out of range.
    pub fn insert(&mut self, distance: usize, word: impl Into<String>) -> bool {
        match self.buckets.get_mut(distance) {
            Some(bucket) => {
                bucket.push(word.into());
                true
            }
            None => false,
        }
    }

    /// Words at exactly `distance`. Empty for out-of-range distances.
    pub fn words(&self, distance: usize) -> &[String] {
        self.buckets.get(distance).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(distance, words)` pairs in ascending distance order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(distance, words)| (distance, words.as_slice()))
    }

    /// Total number of words across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}
