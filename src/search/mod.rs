// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search algorithms: where the rubber meets the road.
//!
//! Everything culminates here. The catalog is built, the text is tokenized,
//! and now you actually find things. Each query kind gets its own matcher:
//! substring or edit distance for words, direct key lookups for years and
//! ISBNs. `SearchEngine` picks one and caches what it finds.

pub mod classify;
pub mod direct;
pub mod engine;
pub mod exact;
pub mod fuzzy;
pub mod ordered;
pub mod session;

pub use classify::{classify, is_isbn};
pub use engine::{SearchEngine, SearchOutcome};
pub use ordered::{binary_search, binary_search_by_first_length_match};
pub use session::{QueryKey, SearchSession, SearchSessionStore};
