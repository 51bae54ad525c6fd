// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search entry point: text in, session out.
//!
//! ```text
//! text ─prepare─▶ tokens ─classify─▶ kind ─┬─ Year ──────▶ year_lookup
//!                                          ├─ Isbn ──────▶ isbn_lookup
//!                                          ├─ Word/Contains ▶ exact::match_terms ─▶ rank
//!                                          ├─ Word/Fuzzy ▶ fuzzy::match_terms ─▶ order_by_distance
//!                                          └─ Undetermined (nothing runs)
//! ```
//!
//! Results land in a `SearchSession` held by the caller's
//! `SearchSessionStore`. A key that was already computed is served from
//! there without touching the catalog.

use tracing::{debug, info_span};

use crate::config::SearchConfig;
use crate::index::Catalog;
use crate::scoring::{order_by_distance, rank};
use crate::search::classify::classify;
use crate::search::session::{QueryKey, SearchSession, SearchSessionStore};
use crate::search::{direct, exact, fuzzy};
use crate::types::{QueryKind, SearchStrategy, WordMode};
use crate::util::prepare_with_limit;

/// How a search call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A matcher ran and filled the session under this key.
    Computed(QueryKey),
    /// The session under this key was already computed; nothing ran.
    Cached(QueryKey),
    /// The query has nothing searchable in it.
    Undetermined,
}

impl SearchOutcome {
    /// The session key, unless the query was undetermined.
    pub fn key(&self) -> Option<&QueryKey> {
        match self {
            SearchOutcome::Computed(key) | SearchOutcome::Cached(key) => Some(key),
            SearchOutcome::Undetermined => None,
        }
    }
}

/// Searches one catalog with one set of limits.
///
/// Borrows the catalog; holds no per-query state of its own, so a single
/// engine can serve any number of session stores.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'c> {
    catalog: &'c Catalog,
    config: SearchConfig,
}

impl<'c> SearchEngine<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_config(catalog, SearchConfig::default())
    }

    pub fn with_config(catalog: &'c Catalog, config: SearchConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Normalize `text` into tokens using this engine's token length limit.
    pub fn prepare(&self, text: &str) -> Vec<String> {
        prepare_with_limit(text, self.config.max_token_length)
    }

    /// Classify `tokens` and build the key they would be searched under.
    /// `None` for undetermined queries.
    pub fn query_key(&self, tokens: Vec<String>, mode: WordMode) -> Option<QueryKey> {
        let kind = classify(&tokens);
        SearchStrategy::for_kind(kind, mode).map(|strategy| QueryKey::new(tokens, strategy))
    }

    /// Prepare, classify and dispatch `text`.
    ///
    /// ```
    /// use folio::{SearchEngine, SearchSessionStore, WordMode};
    /// use folio::testing::sample_catalog;
    ///
    /// let catalog = sample_catalog();
    /// let engine = SearchEngine::new(&catalog);
    /// let mut store = SearchSessionStore::new();
    ///
    /// let outcome = engine.search(&mut store, "The Hobit", WordMode::Fuzzy);
    /// let session = store.get(outcome.key().unwrap()).unwrap();
    /// assert_eq!(session.results, vec!["0618260307"]);
    /// ```
    pub fn search(&self, store: &mut SearchSessionStore, text: &str, mode: WordMode) -> SearchOutcome {
        let tokens = self.prepare(text);
        let kind = classify(&tokens);
        let span = info_span!("search", query = text, kind = ?kind, ?mode);
        let _guard = span.enter();

        if kind == QueryKind::Undetermined {
            debug!(tokens = ?tokens, "query undetermined, nothing to search");
            return SearchOutcome::Undetermined;
        }
        match self.query_key(tokens, mode) {
            Some(key) => self.dispatch(store, key),
            None => SearchOutcome::Undetermined,
        }
    }

    /// Run the strategy named by `key` unless its session is already computed.
    pub fn dispatch(&self, store: &mut SearchSessionStore, key: QueryKey) -> SearchOutcome {
        let session = store.session_mut(key.clone());
        if session.is_computed() {
            debug!(terms = ?key.terms, strategy = ?key.strategy, "session cache hit");
            return SearchOutcome::Cached(key);
        }

        match key.strategy {
            SearchStrategy::Year => self.run_year(&key.terms, session),
            SearchStrategy::Isbn => self.run_isbn(&key.terms, session),
            SearchStrategy::Contains => self.run_contains(&key.terms, session),
            SearchStrategy::Fuzzy => self.run_fuzzy(&key.terms, session),
        }
        session.mark_computed();
        debug!(
            strategy = ?key.strategy,
            matched = session.matched_terms.len(),
            results = session.results.len(),
            "search computed"
        );
        SearchOutcome::Computed(key)
    }

    /// Contains-match every term, then rank by how many terms each book hit.
    pub fn run_contains(&self, terms: &[String], session: &mut SearchSession) {
        let sets = exact::match_terms(self.catalog, terms, session);
        session.results.extend(rank(&sets));
    }

    /// Fuzzy-match every term, then order by edit distance.
    pub fn run_fuzzy(&self, terms: &[String], session: &mut SearchSession) {
        let buckets = fuzzy::match_terms(self.catalog, terms, &self.config, session);
        session
            .results
            .extend(order_by_distance(&buckets, self.catalog.word_index()));
    }

    /// Look up the first term as a year.
    pub fn run_year(&self, terms: &[String], session: &mut SearchSession) {
        if let Some(year) = terms.first() {
            direct::year_lookup(self.catalog, year, session);
        }
    }

    /// Look up the first term as a full or partial ISBN.
    pub fn run_isbn(&self, terms: &[String], session: &mut SearchSession) {
        if let Some(key) = terms.first() {
            direct::isbn_lookup(self.catalog, key, session);
        }
    }
}
