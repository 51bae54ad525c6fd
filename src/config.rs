// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunable search limits.
//!
//! Three knobs, all with defaults that work for catalogs in the tens of
//! thousands of books. A JSON config file may set any subset of them; missing
//! fields keep their default.
//!
//! ```json
//! { "maxEditDistance": 1, "maxResultCount": 50 }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::LoadError;

/// Tokens longer than this are truncated after stop-word filtering.
pub const MAX_TOKEN_LENGTH: usize = 20;

/// Largest edit distance fuzzy search accepts.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// Accepted fuzzy matches per query term before the vocabulary scan stops.
pub const MAX_RESULT_COUNT: usize = 100;

/// Limits applied by the tokenizer and the fuzzy matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub max_token_length: usize,
    pub max_edit_distance: usize,
    pub max_result_count: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_token_length: MAX_TOKEN_LENGTH,
            max_edit_distance: MAX_EDIT_DISTANCE,
            max_result_count: MAX_RESULT_COUNT,
        }
    }
}

impl SearchConfig {
    /// Read a config file. Unknown fields are ignored, missing ones default.
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
