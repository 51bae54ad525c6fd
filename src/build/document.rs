// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::types::{Book, Isbn};

/// One book as it appears in a catalog file.
///
/// Field names follow the lowercase form, with aliases for the
/// `Book-Title` / `Year-Of-Publication` column names of the common
/// book-crossing CSV exports.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    #[serde(alias = "ISBN")]
    pub isbn: String,
    #[serde(default, alias = "Book-Title")]
    pub title: String,
    #[serde(default, alias = "Book-Author")]
    pub author: String,
    #[serde(default, alias = "Publisher")]
    pub publisher: String,
    #[serde(default, alias = "Year-Of-Publication")]
    pub year: RecordYear,
}

/// Years show up both as strings and as bare numbers.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum RecordYear {
    Text(String),
    Number(i64),
}

impl Default for RecordYear {
    fn default() -> Self {
        RecordYear::Text(String::new())
    }
}

impl RecordYear {
    pub fn into_string(self) -> String {
        match self {
            RecordYear::Text(text) => text.trim().to_string(),
            RecordYear::Number(number) => number.to_string(),
        }
    }
}

impl BookRecord {
    /// Split into catalog key and book. `None` for a blank ISBN.
    ///
    /// The ISBN is trimmed and upper-cased so an `x` check digit is stored
    /// the way lookups compare it.
    pub fn into_entry(self) -> Option<(Isbn, Book)> {
        let isbn = self.isbn.trim().to_ascii_uppercase();
        if isbn.is_empty() {
            return None;
        }
        let book = Book {
            title: self.title,
            author: self.author,
            publisher: self.publisher,
            year: self.year.into_string(),
        };
        Some((isbn, book))
    }
}
