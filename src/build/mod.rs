// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a catalog from disk.
//!
//! A catalog file is a JSON array of book records. Loading reads it, drops
//! records without an ISBN, keeps the first of any duplicate ISBNs, indexes
//! what is left and checks the result before handing it over.

pub mod document;

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::config::SearchConfig;
use crate::error::LoadError;
use crate::index::Catalog;
use crate::types::{Book, Isbn};

pub use document::*;

/// Create a progress style for the indexing progress bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// Load and index a catalog file with default limits, quietly.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    load_catalog_with(path, &SearchConfig::default(), false)
}

/// Load and index a catalog file.
///
/// With `show_progress` (and the `parallel` feature) a progress bar tracks
/// tokenization on stderr.
pub fn load_catalog_with(path: &Path, config: &SearchConfig, show_progress: bool) -> Result<Catalog, LoadError> {
    let records = read_records(path)?;
    let record_count = records.len();
    let books = collect_books(records);

    #[cfg(feature = "parallel")]
    let catalog = if show_progress {
        let progress = ProgressBar::new(books.len() as u64);
        progress.set_style(create_progress_style());
        progress.set_prefix("Indexing");
        progress.set_message("books...");
        let catalog = Catalog::with_progress(books, config, &progress);
        progress.finish_and_clear();
        catalog
    } else {
        Catalog::with_config(books, config)
    };

    #[cfg(not(feature = "parallel"))]
    let catalog = {
        let _ = show_progress;
        Catalog::with_config(books, config)
    };

    catalog.validate()?;
    info!(
        path = %path.display(),
        records = record_count,
        books = catalog.len(),
        vocabulary = catalog.word_index().len(),
        years = catalog.year_index().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Parse a catalog file into records without indexing anything.
pub fn read_records(path: &Path) -> Result<Vec<BookRecord>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Key records by ISBN. Blank ISBNs are skipped and the first record wins
/// on duplicates; both are logged.
pub fn collect_books(records: Vec<BookRecord>) -> BTreeMap<Isbn, Book> {
    let mut books = BTreeMap::new();
    for (position, record) in records.into_iter().enumerate() {
        let title = record.title.clone();
        let Some((isbn, book)) = record.into_entry() else {
            warn!(position, title = %title, "record has no ISBN, skipping");
            continue;
        };
        match books.entry(isbn) {
            Entry::Vacant(slot) => {
                slot.insert(book);
            }
            Entry::Occupied(existing) => {
                warn!(position, isbn = %existing.key(), "duplicate ISBN, keeping the first record");
            }
        }
    }
    books
}
