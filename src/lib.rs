// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-process book search over a catalog keyed by ISBN.
//!
//! A query is normalized into tokens, classified (year, ISBN, words, or
//! nothing searchable) and handed to a matcher. Word queries run in one of
//! two modes: substring ("contains") matching or edit-distance ("fuzzy")
//! matching. Results are ordered by how many of the query's terms a book
//! matched, and for fuzzy search by how few edits it took.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   build/    │────▶│   index/     │────▶│  search/engine   │
//! │ (JSON file, │     │  (Catalog:   │     │ (classify, then  │
//! │ BookRecord) │     │ word + year  │     │  dispatch)       │
//! └─────────────┘     │  indices)    │     └──────────────────┘
//!                     └──────────────┘        │     │      │
//!        ┌────────────────────────────────────┘     │      └──────────┐
//!        ▼                                          ▼                 ▼
//! ┌──────────────┐  ┌─────────────────────┐  ┌─────────────┐  ┌──────────────┐
//! │ search/exact │  │ search/fuzzy        │  │ search/     │  │ search/      │
//! │ (contains)   │  │ (fuzzy::distance)   │  │ direct      │  │ session      │
//! └──────────────┘  └─────────────────────┘  │ (year,ISBN) │  │ (cache)      │
//!        │                   │               └─────────────┘  └──────────────┘
//!        ▼                   ▼
//! ┌─────────────────────────────────────┐
//! │ scoring/ranking (overlap tiers,     │
//! │ distance buckets)                   │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use folio::{Catalog, SearchEngine, SearchSessionStore, WordMode};
//! use folio::testing::sample_books;
//!
//! let catalog = Catalog::new(sample_books());
//! let engine = SearchEngine::new(&catalog);
//! let mut store = SearchSessionStore::new();
//!
//! let outcome = engine.search(&mut store, "Harry Potter chamber", WordMode::Contains);
//! let session = store.get(outcome.key().unwrap()).unwrap();
//! let (_, first) = session.resolve(&catalog)[0];
//! assert_eq!(first.title, "Harry Potter and the Chamber of Secrets");
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod types;
pub mod util;
pub mod verify;

pub use build::{load_catalog, load_catalog_with, BookRecord};
pub use config::{SearchConfig, MAX_EDIT_DISTANCE, MAX_RESULT_COUNT, MAX_TOKEN_LENGTH};
pub use error::{InvariantError, LoadError};
pub use fuzzy::distance;
pub use index::{Catalog, CatalogStats};
pub use scoring::{order_by_distance, rank};
pub use search::{
    classify, QueryKey, SearchEngine, SearchOutcome, SearchSession, SearchSessionStore,
};
pub use types::{
    Book, DistanceBuckets, Isbn, IsbnSet, Lookup, QueryKind, SearchStrategy, WordIndex, WordMode,
    YearIndex,
};
pub use util::prepare;
