// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking: how matched books get put in order.
//!
//! There are no numeric scores. A book's place is decided by how many of the
//! query's match sets it appears in, and for fuzzy search, how few edits it
//! took to get there.

pub mod ranking;

pub use ranking::*;
