// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Year and ISBN lookups. No vocabulary, no ranking, just keys.

use tracing::trace;

use crate::index::Catalog;
use crate::search::ordered::binary_search;
use crate::search::session::SearchSession;
use crate::util::length_of;

/// Shortest ISBN fragment searched by substring.
pub const MIN_PARTIAL_ISBN: usize = 4;

/// Fragments up to this length are substrings; longer keys must match whole.
pub const MAX_PARTIAL_ISBN: usize = 8;

/// Every book published in `year`. A year with no books records nothing.
pub fn year_lookup(catalog: &Catalog, year: &str, session: &mut SearchSession) {
    if let Some(isbns) = catalog.year_index().get(year) {
        session.matched_terms.push(year.to_string());
        session.results.extend(isbns.iter().cloned());
    }
    trace!(year, results = session.results.len(), "year lookup");
}

/// Books by ISBN.
///
/// The key is compared upper-cased so a lowercase `x` check digit still
/// matches. Keys of 4 to 8 characters are fragments: every ISBN containing
/// one is both a match and a result. Longer keys must equal a catalog ISBN.
/// Shorter keys find nothing.
pub fn isbn_lookup(catalog: &Catalog, key: &str, session: &mut SearchSession) {
    let key = key.to_ascii_uppercase();
    let isbns = catalog.sorted_isbns();
    match length_of(&key) {
        MIN_PARTIAL_ISBN..=MAX_PARTIAL_ISBN => {
            let hits: Vec<String> = isbns.iter().filter(|isbn| isbn.contains(&key)).cloned().collect();
            session.matched_terms.extend(hits.iter().cloned());
            session.results.extend(hits);
        }
        length if length > MAX_PARTIAL_ISBN => {
            if binary_search(isbns, key.as_str()).is_found() {
                session.matched_terms.push(key.clone());
                session.results.push(key.clone());
            }
        }
        _ => {}
    }
    trace!(key = %key, results = session.results.len(), "isbn lookup");
}
