// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Two subcommands: `search` to query a catalog file and `inspect` to see
//! what got indexed. Logging flags are global so they work in either place.

pub mod display;
pub mod logging;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use folio::WordMode;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Book catalog search with typo tolerance and overlap ranking",
    version
)]
pub struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show errors on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog and print matching books
    Search {
        /// Path to the catalog JSON file
        #[arg(short, long)]
        catalog: PathBuf,

        /// How word queries are matched
        #[arg(short, long, value_enum, default_value_t = ModeArg::Fuzzy)]
        mode: ModeArg,

        /// Maximum number of books to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print the session as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Path to a JSON file overriding search limits
        #[arg(long)]
        config: Option<PathBuf>,

        /// Search text; several words are joined with spaces
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Show catalog statistics
    Inspect {
        /// Path to the catalog JSON file
        #[arg(short, long)]
        catalog: PathBuf,

        /// Path to a JSON file overriding search limits
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Substring matching
    Contains,
    /// Edit-distance matching
    Fuzzy,
}

impl From<ModeArg> for WordMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Contains => WordMode::Contains,
            ModeArg::Fuzzy => WordMode::Fuzzy,
        }
    }
}
