// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character-level normalization.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Strip diacritics so accented and plain spellings meet:
/// - "Café" → "Cafe"
/// - "Tummalachērla" → "Tummalacherla"
/// - "Ürümqi" → "Urumqi"
///
/// Case is left alone. Without the `unicode-normalization` feature this is
/// the identity, and accented letters are later dropped by the alphanumeric
/// filter instead of being folded.
#[cfg(feature = "unicode-normalization")]
pub fn fold_diacritics(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn fold_diacritics(value: &str) -> String {
    value.to_string()
}

/// Combining marks (Unicode category Mn) that NFD splits off base letters.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Keep ASCII letters, ASCII digits and whitespace; drop everything else.
///
/// Whitespace of any kind becomes a plain space so a tab between two words
/// still separates them.
pub fn strip_special(value: &str) -> String {
    value
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c)
            } else if c.is_whitespace() {
                Some(' ')
            } else {
                None
            }
        })
        .collect()
}

/// Length in characters, the unit every length comparison in the crate uses.
#[inline]
pub fn length_of(value: &str) -> usize {
    value.chars().count()
}
