// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the full query path.
//!
//! Arbitrary text goes through tokenizing, classification, dispatch and
//! ranking against a small fixed catalog. Nothing may panic, results must
//! name real books without repeats, and a second identical search must be
//! served from cache with the same results.

#![no_main]

use arbitrary::Arbitrary;
use folio::testing::sample_catalog;
use folio::{Catalog, SearchEngine, SearchOutcome, SearchSessionStore, WordMode};
use libfuzzer_sys::fuzz_target;
use std::collections::BTreeSet;
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct QueryInput {
    text: String,
    contains: bool,
}

fuzz_target!(|input: QueryInput| {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    let catalog = CATALOG.get_or_init(sample_catalog);

    let text: String = input.text.chars().take(200).collect();
    let mode = if input.contains { WordMode::Contains } else { WordMode::Fuzzy };

    let engine = SearchEngine::new(catalog);
    let mut store = SearchSessionStore::new();

    let first = engine.search(&mut store, &text, mode);
    let Some(key) = first.key().cloned() else {
        assert!(store.is_empty());
        return;
    };
    let results = store.get(&key).map(|s| s.results.clone()).unwrap_or_default();

    let unique: BTreeSet<&String> = results.iter().collect();
    assert_eq!(unique.len(), results.len(), "duplicate results for {:?}", text);
    for isbn in &results {
        assert!(catalog.book(isbn).is_some(), "unknown ISBN {} for {:?}", isbn, text);
    }

    let second = engine.search(&mut store, &text, mode);
    assert_eq!(second, SearchOutcome::Cached(key.clone()));
    assert_eq!(store.get(&key).map(|s| s.results.clone()).unwrap_or_default(), results);
});
