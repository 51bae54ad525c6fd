// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: vocabulary words within a few edits of the query term.
//!
//! Edit distance is at least the difference in length, so for a term of
//! length L and a maximum distance D only words of length L-D through L+D
//! can match. That window is found with two length binary searches; every
//! word outside it is skipped without computing anything.
//!
//! Accepted words are bucketed by their exact distance so the ranking step
//! can put exact hits before one-typo hits before two-typo hits.

use tracing::{debug, trace};

use crate::config::SearchConfig;
use crate::fuzzy::distance_within;
use crate::index::Catalog;
use crate::search::ordered::binary_search_by_first_length_match;
use crate::search::session::SearchSession;
use crate::types::DistanceBuckets;
use crate::util::length_of;

/// The slice of a length-sorted `source` worth comparing against a term of
/// `term_length` characters.
///
/// Terms no longer than `max_distance` are compared against everything,
/// since an edit budget that large can reach words of any short length.
/// When a window edge has no word of exactly that length, the window stays
/// open on that side. The result may be wider than necessary, never narrower.
pub fn length_window(source: &[String], term_length: usize, max_distance: usize) -> &[String] {
    let (Some(first), Some(last)) = (source.first(), source.last()) else {
        return source;
    };
    if term_length <= max_distance {
        return source;
    }

    let shortest = length_of(first);
    let longest = length_of(last);
    let lower = (term_length - max_distance).max(shortest);
    if lower > longest {
        return &source[source.len()..];
    }
    let upper = term_length + max_distance + 1;

    let start = binary_search_by_first_length_match(source, lower);
    let end = if upper > longest {
        None
    } else {
        binary_search_by_first_length_match(source, upper)
    };

    match (start, end) {
        (Some(start), Some(end)) => &source[start..end],
        (Some(start), None) => &source[start..],
        (None, Some(end)) => &source[..end],
        (None, None) => source,
    }
}

/// Bucket every vocabulary word within `config.max_edit_distance` of some
/// term by its distance.
///
/// Each term's scan stops once more than `config.max_result_count` words
/// have been accepted for it. Accepted words are also appended to
/// `session.matched_terms`.
pub fn match_terms<S: AsRef<str>>(
    catalog: &Catalog,
    terms: &[S],
    config: &SearchConfig,
    session: &mut SearchSession,
) -> DistanceBuckets {
    let mut buckets = DistanceBuckets::new(config.max_edit_distance);
    let source = catalog.search_source();

    for term in terms {
        let term = term.as_ref();
        let window = length_window(source, length_of(term), config.max_edit_distance);
        trace!(term, window = window.len(), "fuzzy window");

        let mut accepted = 0usize;
        for word in window {
            if accepted > config.max_result_count {
                debug!(term, accepted, "fuzzy match cap reached, stopping scan");
                break;
            }
            if let Some(distance) = distance_within(word, term, config.max_edit_distance) {
                buckets.insert(distance, word.clone());
                session.matched_terms.push(word.clone());
                accepted += 1;
            }
        }
    }
    buckets
}
