// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Contains matching: vocabulary words that have the query term inside them.
//!
//! A word can only contain a term if it is at least as long, so the scan
//! starts at the first word of the term's length (or the next length that
//! exists) and runs to the end of the length-sorted vocabulary. "arry" finds
//! "harry", "carry" and "arrythmia", never "cat".

use tracing::trace;

use crate::index::Catalog;
use crate::search::ordered::first_index_with_length_at_least;
use crate::search::session::SearchSession;
use crate::types::IsbnSet;
use crate::util::length_of;

/// ISBN sets of every vocabulary word containing `term`.
///
/// Matched words are appended to `session.matched_terms` in vocabulary order.
/// An empty term, or one longer than every word, matches nothing.
pub fn match_term<'c>(catalog: &'c Catalog, term: &str, session: &mut SearchSession) -> Vec<&'c IsbnSet> {
    if term.is_empty() {
        return Vec::new();
    }
    let source = catalog.search_source();
    let Some(start) = first_index_with_length_at_least(source, length_of(term)) else {
        return Vec::new();
    };

    let mut sets = Vec::new();
    for word in source[start..].iter().filter(|word| word.contains(term)) {
        if let Some(isbns) = catalog.word_index().get(word) {
            session.matched_terms.push(word.clone());
            sets.push(isbns);
        }
    }
    trace!(term, start, matched = sets.len(), "contains scan");
    sets
}

/// ISBN sets of every word matched by any of `terms`, one set per matched
/// word, in term order.
///
/// A book reached through several matched words appears in several sets, so
/// the ranker places it above a book reached through one.
pub fn match_terms<'c, S: AsRef<str>>(
    catalog: &'c Catalog,
    terms: &[S],
    session: &mut SearchSession,
) -> Vec<&'c IsbnSet> {
    terms
        .iter()
        .flat_map(|term| match_term(catalog, term.as_ref(), session))
        .collect()
}
