// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog invariants, checked at runtime.
//!
//! The matchers assume a lot: length-sorted vocabulary for the binary
//! searches, sorted ISBNs for the direct lookups, non-empty sets for ranking.
//! A catalog built by `Catalog::new` satisfies all of it by construction.
//! One assembled with `Catalog::from_parts` from outside data might not, so
//! `check_catalog` walks every structure once and reports the first problem.

mod types;

pub use types::*;

use crate::index::{is_year_key, Catalog};
use crate::util::length_of;

/// Check every catalog invariant, stopping at the first violation.
pub fn check_catalog(catalog: &Catalog) -> Result<(), InvariantError> {
    check_word_index(catalog)?;
    check_year_index(catalog)?;
    check_search_source(catalog)?;
    check_sorted_isbns(catalog)
}

fn check_word_index(catalog: &Catalog) -> Result<(), InvariantError> {
    for (term, isbns) in catalog.word_index() {
        if isbns.is_empty() {
            return Err(InvariantError::EmptyWordEntry { term: term.clone() });
        }
        if let Some(isbn) = isbns.iter().find(|isbn| catalog.book(isbn).is_none()) {
            return Err(InvariantError::UnknownIsbn {
                key: term.clone(),
                isbn: isbn.clone(),
            });
        }
    }
    Ok(())
}

fn check_year_index(catalog: &Catalog) -> Result<(), InvariantError> {
    for (year, isbns) in catalog.year_index() {
        if !is_year_key(year) {
            return Err(InvariantError::MalformedYear { year: year.clone() });
        }
        if isbns.is_empty() {
            return Err(InvariantError::EmptyYearEntry { year: year.clone() });
        }
        if let Some(isbn) = isbns.iter().find(|isbn| catalog.book(isbn).is_none()) {
            return Err(InvariantError::UnknownIsbn {
                key: year.clone(),
                isbn: isbn.clone(),
            });
        }
    }
    Ok(())
}

fn check_search_source(catalog: &Catalog) -> Result<(), InvariantError> {
    let source = catalog.search_source();
    if source.len() != catalog.word_index().len() {
        return Err(InvariantError::MismatchedSearchSource {
            source_len: source.len(),
            index_len: catalog.word_index().len(),
        });
    }
    for (position, pair) in source.windows(2).enumerate() {
        if length_of(&pair[0]) > length_of(&pair[1]) {
            return Err(InvariantError::UnsortedSearchSource {
                position: position + 1,
            });
        }
    }
    Ok(())
}

fn check_sorted_isbns(catalog: &Catalog) -> Result<(), InvariantError> {
    for (position, pair) in catalog.sorted_isbns().windows(2).enumerate() {
        if pair[0] >= pair[1] {
            return Err(InvariantError::UnsortedIsbns {
                position: position + 1,
            });
        }
    }
    Ok(())
}
