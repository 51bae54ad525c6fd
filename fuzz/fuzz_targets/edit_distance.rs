// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance.
//!
//! The bounded variant must agree with the full matrix whenever the true
//! distance fits the budget, and report `None` otherwise. Both must be
//! symmetric and bounded by the longer input's length.

#![no_main]

use arbitrary::Arbitrary;
use folio::fuzzy::{distance, distance_within};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
    max: u8,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts
    let a: String = input.a.chars().take(48).collect();
    let b: String = input.b.chars().take(48).collect();
    let max = usize::from(input.max % 8);

    let full = distance(&a, &b);
    assert_eq!(full, distance(&b, &a), "asymmetric: {:?} {:?}", a, b);
    assert!(full <= a.chars().count().max(b.chars().count()));
    assert_eq!(full == 0, a == b);

    let bounded = distance_within(&a, &b, max);
    if full <= max {
        assert_eq!(bounded, Some(full), "{:?} {:?} max={}", a, b, max);
    } else {
        assert_eq!(bounded, None, "{:?} {:?} max={}", a, b, max);
    }
});
