// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use std::collections::BTreeMap;

use crate::index::Catalog;
use crate::types::{Book, Isbn, WordIndex, YearIndex};

/// Build a book record.
pub fn make_book(title: &str, author: &str, publisher: &str, year: &str) -> Book {
    Book {
        title: title.to_string(),
        author: author.to_string(),
        publisher: publisher.to_string(),
        year: year.to_string(),
    }
}

/// Ten real-ish books, four of them sharing "harry potter rowling scholastic".
///
/// | ISBN       | Title                                    | Year |
/// |------------|------------------------------------------|------|
/// | 0439708184 | Harry Potter and the Sorcerer's Stone    | 1999 |
/// | 0439064864 | Harry Potter and the Chamber of Secrets  | 2000 |
/// | 0439136350 | Harry Potter and the Prisoner of Azkaban | 2001 |
/// | 043942089X | Harry Potter and the Goblet of Fire      | 2002 |
/// | 0618260307 | The Hobbit                               | 2002 |
/// | 0060256656 | The Giving Tree                          | 1964 |
/// | 1593279280 | The Rust Programming Language            | 2018 |
/// | 0060254920 | Where the Wild Things Are                | 1988 |
/// | 0451524934 | 1984                                     | 1950 |
/// | 0307277674 | The Road                                 | 2006 |
pub fn sample_books() -> BTreeMap<Isbn, Book> {
    [
        ("0439708184", "Harry Potter and the Sorcerer's Stone", "J. K. Rowling", "Scholastic", "1999"),
        ("0439064864", "Harry Potter and the Chamber of Secrets", "J. K. Rowling", "Scholastic", "2000"),
        ("0439136350", "Harry Potter and the Prisoner of Azkaban", "J. K. Rowling", "Scholastic", "2001"),
        ("043942089X", "Harry Potter and the Goblet of Fire", "J. K. Rowling", "Scholastic", "2002"),
        ("0618260307", "The Hobbit", "J. R. R. Tolkien", "Houghton Mifflin", "2002"),
        ("0060256656", "The Giving Tree", "Shel Silverstein", "HarperCollins", "1964"),
        ("1593279280", "The Rust Programming Language", "Steve Klabnik", "No Starch Press", "2018"),
        ("0060254920", "Where the Wild Things Are", "Maurice Sendak", "HarperCollins", "1988"),
        ("0451524934", "1984", "George Orwell", "Signet Classic", "1950"),
        ("0307277674", "The Road", "Cormac McCarthy", "Vintage", "2006"),
    ]
    .into_iter()
    .map(|(isbn, title, author, publisher, year)| {
        (isbn.to_string(), make_book(title, author, publisher, year))
    })
    .collect()
}

/// `sample_books()` indexed with the default config.
pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_books())
}

/// A catalog with exactly the given word index and no years.
///
/// Every ISBN mentioned gets a placeholder book, so the result validates.
pub fn word_catalog(entries: &[(&str, &[&str])]) -> Catalog {
    let mut books = BTreeMap::new();
    let mut words = WordIndex::new();
    for (word, isbns) in entries {
        for isbn in *isbns {
            books
                .entry(isbn.to_string())
                .or_insert_with(|| make_book(&format!("Book {}", isbn), "", "", ""));
            words
                .entry(word.to_string())
                .or_default()
                .insert(isbn.to_string());
        }
    }
    Catalog::from_parts(books, words, YearIndex::new())
}
