// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The catalog: books plus the indices every search reads.
//!
//! A `Catalog` is built once and then only read. It owns four derived
//! structures next to the books themselves:
//!
//! - **WordIndex**: token → ISBNs, from each book's title, author and publisher
//! - **YearIndex**: 4-digit year → ISBNs
//! - **SearchSource**: the WordIndex keys sorted by character length, then
//!   alphabetically, so length windows can be found by binary search
//! - **Sorted ISBNs**: every catalog key in ascending order
//!
//! Tokenizing the books is the only expensive step. With the `parallel`
//! feature it runs on rayon's pool; merging tokens into the index stays
//! sequential so the result does not depend on scheduling.

use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::types::{Book, Isbn, WordIndex, YearIndex};
use crate::util::{length_of, prepare_with_limit};
use crate::verify::{check_catalog, InvariantError};

/// Books keyed by ISBN, with the indices derived from them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: BTreeMap<Isbn, Book>,
    word_index: WordIndex,
    year_index: YearIndex,
    search_source: Vec<String>,
    sorted_isbns: Vec<Isbn>,
}

/// Summary numbers for a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub books: usize,
    pub vocabulary: usize,
    pub years: usize,
    pub shortest_word: usize,
    pub longest_word: usize,
}

impl Catalog {
    /// Index `books` with the default token length limit.
    pub fn new(books: BTreeMap<Isbn, Book>) -> Self {
        Self::with_config(books, &SearchConfig::default())
    }

    /// Index `books`, truncating tokens to `config.max_token_length`.
    pub fn with_config(books: BTreeMap<Isbn, Book>, config: &SearchConfig) -> Self {
        let tokens = tokenize_books(&books, config.max_token_length);
        let word_index = index_words(tokens);
        let year_index = index_years(&books);
        Self::from_indices(books, word_index, year_index)
    }

    /// Same as `with_config`, advancing `progress` once per tokenized book.
    #[cfg(feature = "parallel")]
    pub fn with_progress(
        books: BTreeMap<Isbn, Book>,
        config: &SearchConfig,
        progress: &ProgressBar,
    ) -> Self {
        let counter = AtomicUsize::new(0);
        let total = books.len();
        let tokens: Vec<(&Isbn, Vec<String>)> = books
            .par_iter()
            .map(|(isbn, book)| {
                let tokens = book_tokens(book, config.max_token_length);
                let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
                progress.set_position(count as u64);
                if count % 1000 == 0 || count == total {
                    progress.set_message(format!("{}/{}", count, total));
                }
                (isbn, tokens)
            })
            .collect();
        let word_index = index_words(tokens);
        let year_index = index_years(&books);
        Self::from_indices(books, word_index, year_index)
    }

    /// Assemble a catalog from indices built elsewhere.
    ///
    /// Entries with empty ISBN sets are dropped, since an empty entry would
    /// put a word in the vocabulary that can never produce a result. Nothing
    /// else is checked here; call `validate` for that.
    pub fn from_parts(
        books: BTreeMap<Isbn, Book>,
        word_index: WordIndex,
        year_index: YearIndex,
    ) -> Self {
        let word_index = word_index
            .into_iter()
            .filter(|(_, isbns)| !isbns.is_empty())
            .collect();
        let year_index = year_index
            .into_iter()
            .filter(|(_, isbns)| !isbns.is_empty())
            .collect();
        Self::from_indices(books, word_index, year_index)
    }

    fn from_indices(books: BTreeMap<Isbn, Book>, word_index: WordIndex, year_index: YearIndex) -> Self {
        let search_source = length_sorted_vocabulary(&word_index);
        let sorted_isbns = books.keys().cloned().collect();
        debug!(
            books = books.len(),
            vocabulary = word_index.len(),
            years = year_index.len(),
            "catalog indexed"
        );
        Self {
            books,
            word_index,
            year_index,
            search_source,
            sorted_isbns,
        }
    }

    /// Check every structural invariant the matchers rely on.
    pub fn validate(&self) -> Result<(), InvariantError> {
        check_catalog(self)
    }

    pub fn books(&self) -> &BTreeMap<Isbn, Book> {
        &self.books
    }

    pub fn book(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    pub fn word_index(&self) -> &WordIndex {
        &self.word_index
    }

    pub fn year_index(&self) -> &YearIndex {
        &self.year_index
    }

    /// Vocabulary sorted ascending by character length.
    pub fn search_source(&self) -> &[String] {
        &self.search_source
    }

    /// Every ISBN in the catalog, ascending.
    pub fn sorted_isbns(&self) -> &[Isbn] {
        &self.sorted_isbns
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            books: self.books.len(),
            vocabulary: self.word_index.len(),
            years: self.year_index.len(),
            shortest_word: self.search_source.first().map_or(0, |w| length_of(w)),
            longest_word: self.search_source.last().map_or(0, |w| length_of(w)),
        }
    }
}

/// The WordIndex keys, shortest first. Ties keep the index's alphabetical order.
pub fn length_sorted_vocabulary(index: &WordIndex) -> Vec<String> {
    let mut words: Vec<String> = index.keys().cloned().collect();
    words.sort_by_key(|word| length_of(word));
    words
}

/// Is `year` usable as a YearIndex key?
pub fn is_year_key(year: &str) -> bool {
    year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit())
}

fn book_tokens(book: &Book, max_token_length: usize) -> Vec<String> {
    let mut tokens = prepare_with_limit(&book.title, max_token_length);
    tokens.extend(prepare_with_limit(&book.author, max_token_length));
    tokens.extend(prepare_with_limit(&book.publisher, max_token_length));
    tokens
}

#[cfg(feature = "parallel")]
fn tokenize_books(books: &BTreeMap<Isbn, Book>, max_token_length: usize) -> Vec<(&Isbn, Vec<String>)> {
    books
        .par_iter()
        .map(|(isbn, book)| (isbn, book_tokens(book, max_token_length)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn tokenize_books(books: &BTreeMap<Isbn, Book>, max_token_length: usize) -> Vec<(&Isbn, Vec<String>)> {
    books
        .iter()
        .map(|(isbn, book)| (isbn, book_tokens(book, max_token_length)))
        .collect()
}

fn index_words(tokens: Vec<(&Isbn, Vec<String>)>) -> WordIndex {
    let mut index = WordIndex::new();
    for (isbn, words) in tokens {
        for word in words {
            index.entry(word).or_default().insert(isbn.clone());
        }
    }
    index
}

fn index_years(books: &BTreeMap<Isbn, Book>) -> YearIndex {
    let mut index = YearIndex::new();
    for (isbn, book) in books {
        let year = book.year.trim();
        if is_year_key(year) {
            index.entry(year.to_string()).or_default().insert(isbn.clone());
        } else if !year.is_empty() {
            warn!(isbn = %isbn, year = %book.year, "year is not 4 digits, not indexing it");
        }
    }
    index
}
