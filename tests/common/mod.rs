//! Shared test utilities and fixtures.

#![allow(dead_code)]

use folio::{Catalog, Isbn, IsbnSet, SearchEngine, SearchSession, SearchSessionStore, WordMode};

// Re-export canonical fixtures from folio::testing
pub use folio::testing::{make_book, sample_books, sample_catalog, word_catalog};

// ISBNs of the sample catalog, named for readability.
pub const SORCERERS_STONE: &str = "0439708184";
pub const CHAMBER_OF_SECRETS: &str = "0439064864";
pub const PRISONER_OF_AZKABAN: &str = "0439136350";
pub const GOBLET_OF_FIRE: &str = "043942089X";
pub const HOBBIT: &str = "0618260307";
pub const GIVING_TREE: &str = "0060256656";
pub const RUST_BOOK: &str = "1593279280";
pub const WILD_THINGS: &str = "0060254920";
pub const NINETEEN_EIGHTY_FOUR: &str = "0451524934";
pub const THE_ROAD: &str = "0307277674";

/// The session a one-off search produces, or `None` if it was undetermined.
pub fn search_session(catalog: &Catalog, text: &str, mode: WordMode) -> Option<SearchSession> {
    let engine = SearchEngine::new(catalog);
    let mut store = SearchSessionStore::new();
    let outcome = engine.search(&mut store, text, mode);
    outcome.key().and_then(|key| store.get(key)).cloned()
}

/// Result ISBNs of a one-off search; empty if undetermined.
pub fn search_results(catalog: &Catalog, text: &str, mode: WordMode) -> Vec<Isbn> {
    search_session(catalog, text, mode)
        .map(|session| session.results)
        .unwrap_or_default()
}

pub fn isbns(values: &[&str]) -> IsbnSet {
    values.iter().map(|v| v.to_string()).collect()
}

/// Assert `results` has no ISBN twice.
pub fn assert_unique(results: &[Isbn]) {
    let unique: IsbnSet = results.iter().cloned().collect();
    assert_eq!(unique.len(), results.len(), "duplicate ISBNs in {:?}", results);
}
