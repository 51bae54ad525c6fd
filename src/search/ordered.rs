// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search over sorted slices.
//!
//! Two flavors, for the two sort orders the catalog keeps:
//!
//! - `binary_search`: membership in a slice sorted by value (the ISBN list).
//! - `binary_search_by_first_length_match`: the first word of a given length
//!   in a slice sorted by character length (the search source).
//!
//! Both narrow an explicit `[lo, hi)` range instead of re-slicing, so the
//! returned positions are always absolute.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::types::Lookup;
use crate::util::length_of;

/// Is `target` in `source`? `source` must be sorted ascending.
///
/// Empty input is simply `NotFound`. The element and target types are tied
/// through `Borrow`, so searching a `&[String]` for a `&str` works without
/// allocating.
///
/// ```
/// use folio::search::binary_search;
/// use folio::Lookup;
///
/// let isbns = ["0439064864", "0439136350", "0439139597"];
/// assert_eq!(binary_search(&isbns, "0439136350"), Lookup::MatchFound);
/// assert_eq!(binary_search(&isbns, "0000000000"), Lookup::NotFound);
/// ```
pub fn binary_search<T, Q>(source: &[T], target: &Q) -> Lookup
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    search_within(source, target, 0, source.len())
}

fn search_within<T, Q>(source: &[T], target: &Q, lo: usize, hi: usize) -> Lookup
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    if lo >= hi {
        return Lookup::NotFound;
    }
    let mid = lo + (hi - lo) / 2;
    match target.cmp(source[mid].borrow()) {
        Ordering::Equal => Lookup::MatchFound,
        Ordering::Less => search_within(source, target, lo, mid),
        Ordering::Greater => search_within(source, target, mid + 1, hi),
    }
}

/// Index of the first word whose character length is exactly `target_length`.
///
/// `source` must be sorted ascending by character length. Returns `None` when
/// the slice is empty, when `target_length` is outside the lengths present, or
/// when no word has exactly that length.
pub fn binary_search_by_first_length_match<S: AsRef<str>>(
    source: &[S],
    target_length: usize,
) -> Option<usize> {
    let shortest = length_of(source.first()?.as_ref());
    let longest = length_of(source.last()?.as_ref());
    if target_length < shortest || target_length > longest {
        return None;
    }
    first_length_within(source, target_length, 0, source.len())
}

fn first_length_within<S: AsRef<str>>(
    source: &[S],
    target_length: usize,
    lo: usize,
    hi: usize,
) -> Option<usize> {
    if lo >= hi {
        return None;
    }
    let mid = lo + (hi - lo) / 2;
    let mid_length = length_of(source[mid].as_ref());
    match target_length.cmp(&mid_length) {
        Ordering::Equal => {
            // Everything before `lo` is shorter, so a predecessor of the same
            // length can only sit inside [lo, mid).
            if mid == lo || length_of(source[mid - 1].as_ref()) < mid_length {
                Some(mid)
            } else {
                first_length_within(source, target_length, lo, mid)
            }
        }
        Ordering::Less => first_length_within(source, target_length, lo, mid),
        Ordering::Greater => first_length_within(source, target_length, mid + 1, hi),
    }
}

/// Index of the first word at least `min_length` characters long.
///
/// Probes exact lengths `min_length, min_length + 1, ...` up to the longest
/// word, so gaps in the length distribution are skipped over. `None` when
/// every word is shorter.
pub fn first_index_with_length_at_least<S: AsRef<str>>(
    source: &[S],
    min_length: usize,
) -> Option<usize> {
    let longest = length_of(source.last()?.as_ref());
    (min_length..=longest).find_map(|length| binary_search_by_first_length_match(source, length))
}
