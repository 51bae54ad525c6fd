// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the folio CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. `FOLIO_THEME`
//! picks explicitly, `COLORFGBG` is consulted next, and dark is the default.
//! `NO_COLOR`, `--no-color` and non-TTY stdout all turn color off.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use folio::{Book, Catalog, CatalogStats, Isbn, QueryKey, SearchSession};

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static DETECTED_THEME: OnceLock<Theme> = OnceLock::new();
static PLAIN_OUTPUT: AtomicBool = AtomicBool::new(false);

impl Theme {
    fn from_env() -> Self {
        let explicit = std::env::var("FOLIO_THEME").ok().and_then(|name| {
            match name.to_ascii_lowercase().as_str() {
                "light" | "l" => Some(Theme::Light),
                "dark" | "d" => Some(Theme::Dark),
                _ => None,
            }
        });
        explicit
            .or_else(|| std::env::var("COLORFGBG").ok().and_then(|v| Self::from_colorfgbg(&v)))
            .unwrap_or(Theme::Dark)
    }

    /// `COLORFGBG` is "fg;bg" (sometimes "fg;default;bg"). Background
    /// palette entries 7 and 9-15 are light.
    fn from_colorfgbg(value: &str) -> Option<Self> {
        let background: u8 = value.rsplit(';').next()?.parse().ok()?;
        Some(if background >= 7 && background != 8 {
            Theme::Light
        } else {
            Theme::Dark
        })
    }

    pub fn current() -> Self {
        *DETECTED_THEME.get_or_init(Theme::from_env)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// The handful of palette entries the reports use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Yellow,
    Blue,
    Cyan,
    Gray,
}

impl Color {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match theme {
            // OneDark
            Theme::Dark => match self {
                Color::Green => (152, 195, 121),
                Color::Yellow => (229, 192, 123),
                Color::Blue => (97, 175, 239),
                Color::Cyan => (86, 182, 194),
                Color::Gray => (92, 99, 112),
            },
            // One Light
            Theme::Light => match self {
                Color::Green => (80, 161, 79),
                Color::Yellow => (193, 132, 1),
                Color::Blue => (64, 120, 242),
                Color::Cyan => (1, 132, 188),
                Color::Gray => (160, 161, 167),
            },
        }
    }

    fn escape(self) -> String {
        let (r, g, b) = self.rgb(Theme::current());
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

/// Turn color off for the rest of the process (`--no-color`).
pub fn disable_colors() {
    PLAIN_OUTPUT.store(true, Ordering::Relaxed);
}

pub fn use_colors() -> bool {
    if PLAIN_OUTPUT.load(Ordering::Relaxed) || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Wrap `text` in `styles` and an optional color, or return it unchanged
/// when color is off.
pub fn paint(text: &str, color: Option<Color>, styles: &[&str]) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let color = color.map(Color::escape).unwrap_or_default();
    format!("{}{}{}{}", styles.concat(), color, text, RESET)
}

/// Cut `text` to `width` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// Print the first `limit` resolved books of a session as an aligned list.
pub fn print_results(key: &QueryKey, session: &SearchSession, books: &[(&Isbn, &Book)], limit: usize) {
    let strategy = format!("{:?}", key.strategy).to_lowercase();
    println!(
        "{} {} {}",
        paint("Query", None, &[BOLD]),
        paint(&key.terms.join(" "), Some(Color::Cyan), &[]),
        paint(&format!("({})", strategy), None, &[DIM]),
    );

    if books.is_empty() {
        println!("  {}", paint("no matches", Some(Color::Gray), &[]));
        return;
    }

    for (rank, (isbn, book)) in books.iter().take(limit).enumerate() {
        println!(
            "{:>4}. {}  {}  {}",
            rank + 1,
            paint(isbn, Some(Color::Yellow), &[]),
            paint(&truncate(&book.title, 50), Some(Color::Green), &[BOLD]),
            paint(&format!("{} · {} · {}", book.author, book.publisher, book.year), None, &[DIM]),
        );
    }

    let shown = books.len().min(limit);
    let matched = session.matched_terms.len();
    println!(
        "{}",
        paint(
            &format!("  {} of {} books shown, {} matched terms", shown, books.len(), matched),
            None,
            &[DIM]
        )
    );
}

/// The `--json` form of a search: the key, matched terms and the first
/// `limit` resolved books.
pub fn results_json(
    key: &QueryKey,
    session: &SearchSession,
    catalog: &Catalog,
    limit: usize,
) -> serde_json::Result<String> {
    let results: Vec<serde_json::Value> = session
        .resolve(catalog)
        .into_iter()
        .take(limit)
        .map(|(isbn, book)| serde_json::json!({ "isbn": isbn, "book": book }))
        .collect();
    serde_json::to_string_pretty(&serde_json::json!({
        "query": key,
        "matchedTerms": session.matched_terms,
        "results": results,
    }))
}

pub fn print_stats(stats: &CatalogStats) {
    println!("{}", paint("Catalog", None, &[BOLD]));
    let rows = [
        ("books", stats.books),
        ("vocabulary", stats.vocabulary),
        ("years", stats.years),
        ("shortest word", stats.shortest_word),
        ("longest word", stats.longest_word),
    ];
    for (label, value) in rows {
        println!("  {:<14} {}", label, paint(&value.to_string(), Some(Color::Blue), &[]));
    }
}
