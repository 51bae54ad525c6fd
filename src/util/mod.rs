// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text preparation shared by indexing and querying.
//!
//! Index build and query time must agree on what a "word" is, or nothing will
//! ever match. Both sides go through `tokenize::prepare`, which is built on
//! the character folding in `normalize`.

pub mod normalize;
pub mod tokenize;

pub use normalize::{fold_diacritics, length_of};
pub use tokenize::{is_stop_word, prepare, prepare_with_limit};
