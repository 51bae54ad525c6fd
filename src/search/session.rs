// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-query result records and the store that caches them.
//!
//! Every distinct (tokens, strategy) pair gets one `SearchSession`. The first
//! search fills it in; repeating the search finds it already computed and
//! does no matching at all. Sessions live as long as the store.

use serde::Serialize;
use std::collections::HashMap;

use crate::index::Catalog;
use crate::types::{Book, Isbn, SearchStrategy};

/// Identity of a search: the prepared tokens plus the strategy they were
/// dispatched to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct QueryKey {
    pub terms: Vec<String>,
    pub strategy: SearchStrategy,
}

impl QueryKey {
    pub fn new(terms: Vec<String>, strategy: SearchStrategy) -> Self {
        Self { terms, strategy }
    }
}

/// What one search found.
///
/// `matched_terms` lists the vocabulary words (or years, or ISBNs) that
/// matched, in the order the matcher accepted them. `results` lists ISBNs,
/// most relevant first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSession {
    pub matched_terms: Vec<String>,
    pub results: Vec<Isbn>,
    #[serde(skip)]
    computed: bool,
}

impl SearchSession {
    /// Has a matcher already run for this session? An empty result set
    /// counts as computed, so a miss is not retried either.
    pub fn is_computed(&self) -> bool {
        self.computed
    }

    pub(crate) fn mark_computed(&mut self) {
        self.computed = true;
    }

    /// Look up each result ISBN in `catalog`, in result order.
    ///
    /// ISBNs the catalog does not know are skipped; they can only appear if
    /// the session was computed against a different catalog.
    pub fn resolve<'c>(&self, catalog: &'c Catalog) -> Vec<(&'c Isbn, &'c Book)> {
        self.results
            .iter()
            .filter_map(|isbn| catalog.books().get_key_value(isbn))
            .collect()
    }
}

/// All sessions of one caller, keyed by `QueryKey`.
#[derive(Debug, Default)]
pub struct SearchSessionStore {
    sessions: HashMap<QueryKey, SearchSession>,
}

impl SearchSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &QueryKey) -> Option<&SearchSession> {
        self.sessions.get(key)
    }

    /// The session for `key`, created empty if this is the first time.
    pub fn session_mut(&mut self, key: QueryKey) -> &mut SearchSession {
        self.sessions.entry(key).or_default()
    }

    /// True once a matcher has filled in the session for `key`.
    pub fn is_cached(&self, key: &QueryKey) -> bool {
        self.sessions.get(key).is_some_and(SearchSession::is_computed)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QueryKey, &SearchSession)> {
        self.sessions.iter()
    }
}
