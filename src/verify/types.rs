// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What can be wrong with a catalog.
//!
//! Each variant names the structure that broke and carries enough context
//! to find the offending entry.

/// Error type for catalog invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    /// A word maps to no books.
    #[error("word index entry '{term}' has no ISBNs")]
    EmptyWordEntry { term: String },

    /// A year maps to no books.
    #[error("year index entry '{year}' has no ISBNs")]
    EmptyYearEntry { year: String },

    /// A year key is not a 4-digit string.
    #[error("year index key '{year}' is not a 4-digit year")]
    MalformedYear { year: String },

    /// The search source is out of length order.
    #[error("search source not sorted by length at position {position}")]
    UnsortedSearchSource { position: usize },

    /// The search source and the word index disagree about the vocabulary.
    #[error("search source has {source_len} words but word index has {index_len}")]
    MismatchedSearchSource { source_len: usize, index_len: usize },

    /// The ISBN list is not strictly ascending.
    #[error("ISBN list not strictly ascending at position {position}")]
    UnsortedIsbns { position: usize },

    /// An index refers to a book the catalog does not have.
    #[error("'{key}' refers to unknown ISBN {isbn}")]
    UnknownIsbn { key: String, isbn: String },
}
