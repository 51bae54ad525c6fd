// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors at the edges of the crate.
//!
//! Searching never fails: a missing key, an empty vocabulary or an
//! unclassifiable query all come back as empty results or a `NotFound`
//! sentinel. Only reading things from disk and checking catalog invariants
//! can go wrong, and those are the only places that return a `Result`.

use std::path::PathBuf;

pub use crate::verify::InvariantError;

/// Failure while loading a catalog or config file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not the JSON shape we expect.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The data parsed, but the catalog built from it is inconsistent.
    #[error("catalog invariant violated: {0}")]
    Invariant(#[from] InvariantError),
}
