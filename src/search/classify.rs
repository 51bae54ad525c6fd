// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deciding what kind of query we were handed.
//!
//! Only the prepared tokens are looked at, never the catalog. The rules:
//!
//! | Tokens | Token length | Shape                      | Kind         |
//! |--------|--------------|----------------------------|--------------|
//! | none   |              |                            | Undetermined |
//! | 2+     |              |                            | Word         |
//! | 1      | 1-3          |                            | Undetermined |
//! | 1      | 4            | all digits                 | Year         |
//! | 1      | 4            | otherwise                  | Word         |
//! | 1      | 5-13         | all digits or ISBN-shaped  | Isbn         |
//! | 1      | 5-13         | otherwise                  | Word         |
//! | 1      | 14+          | all digits                 | Undetermined |
//! | 1      | 14+          | otherwise                  | Word         |

use regex::Regex;
use std::sync::LazyLock;

use crate::types::QueryKind;
use crate::util::length_of;

/// Optional "ISBN", "ISBN-10" or "ISBN-13" label, with optional colon.
static ISBN_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ISBN(?:-1[03])?:? ").expect("ISBN label pattern compiles"));

/// Group structure of an ISBN-10 or ISBN-13 once the label is removed.
static ISBN_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:97[89][- ]?)?[0-9]{1,5}[- ]?(?:[0-9]+[- ]?){2}[0-9X]$")
        .expect("ISBN body pattern compiles")
});

/// Classify a prepared token list.
pub fn classify<S: AsRef<str>>(tokens: &[S]) -> QueryKind {
    match tokens {
        [] => QueryKind::Undetermined,
        [single] => classify_single(single.as_ref()),
        _ => QueryKind::Word,
    }
}

fn classify_single(token: &str) -> QueryKind {
    let all_digits = !token.is_empty() && token.chars().all(|c| c.is_ascii_digit());
    match length_of(token) {
        0..=3 => QueryKind::Undetermined,
        4 if all_digits => QueryKind::Year,
        5..=13 if all_digits || is_isbn(token) => QueryKind::Isbn,
        14.. if all_digits => QueryKind::Undetermined,
        _ => QueryKind::Word,
    }
}

/// Does `candidate` look like an ISBN-10 or ISBN-13?
///
/// Accepts the usual written forms: bare digits, hyphen or space separated
/// groups, an optional `ISBN`/`ISBN-10`/`ISBN-13` label, and a trailing `X`
/// check digit. Case-insensitive, because tokens arrive lowercased.
///
/// ```
/// use folio::search::is_isbn;
///
/// assert!(is_isbn("0-439-13959-7"));
/// assert!(is_isbn("ISBN-13: 978-0-439-13959-5"));
/// assert!(is_isbn("043942089x"));
/// assert!(!is_isbn("potter"));
/// ```
pub fn is_isbn(candidate: &str) -> bool {
    let upper = candidate.to_ascii_uppercase();
    let body = match ISBN_LABEL.find(&upper) {
        Some(label) => &upper[label.end()..],
        None => upper.as_str(),
    };
    has_isbn_length(body) && ISBN_BODY.is_match(body)
}

/// Total length check for the three accepted layouts: 17 characters of
/// digits and separators (ISBN-13 with separators), 13 characters that may
/// include separators or `X`, or 10 bare digits with an optional `X`.
fn has_isbn_length(body: &str) -> bool {
    let only = |allowed: fn(u8) -> bool| body.bytes().all(allowed);
    match body.len() {
        17 => only(|b| b.is_ascii_digit() || b == b'-' || b == b' '),
        13 => only(|b| b.is_ascii_digit() || b == b'-' || b == b' ' || b == b'X'),
        10 => only(|b| b.is_ascii_digit() || b == b'X'),
        _ => false,
    }
}
