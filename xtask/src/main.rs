//! Custom cargo commands for folio.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask features  - Test every feature combination
//!   cargo xtask check     - Quick check (default features only)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Languages the tokenizer filters.
const STOP_WORD_LANGUAGES: &[&str] = &["english", "spanish", "german", "french"];

const LICENSE_HEADER: &str = "// SPDX-License-Identifier: Apache-2.0";

/// Feature sets the crate must build and pass tests under.
const FEATURE_MATRIX: &[&[&str]] = &[
    &["--no-default-features"],
    &["--no-default-features", "--features", "parallel"],
    &["--no-default-features", "--features", "unicode-normalization"],
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("features") => features()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (headers + tests + clippy + features)
  test      Run all Rust tests
  features  Test every feature combination
  check     Quick check (cargo test + clippy, default features)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("folio Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking license headers...");
    check_license_headers()?;
    println!("✓ Every source file carries the license header\n");

    println!("[2/5] Checking stop word data...");
    check_stop_words()?;
    println!("✓ Stop word lists present\n");

    println!("[3/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[5/5] Testing feature combinations...");
    features()?;
    println!("✓ All feature combinations pass\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Test the crate with each optional feature on its own and with none.
fn features() -> Result<()> {
    for (step, flags) in FEATURE_MATRIX.iter().enumerate() {
        println!("  [{}/{}] cargo test {}", step + 1, FEATURE_MATRIX.len(), flags.join(" "));
        let mut args = vec!["test", "--quiet", "--lib", "--tests"];
        args.extend_from_slice(flags);
        run_cargo(&args)?;
    }
    Ok(())
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_license_headers() -> Result<()> {
    let root = project_root()?;
    let mut missing = Vec::new();
    for dir in ["src", "fuzz/fuzz_targets"] {
        collect_missing_headers(&root.join(dir), &mut missing)?;
    }

    if !missing.is_empty() {
        bail!(
            "{} file(s) missing the license header:\n  {}",
            missing.len(),
            missing.join("\n  ")
        );
    }
    Ok(())
}

fn collect_missing_headers(dir: &Path, missing: &mut Vec<String>) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }
    for entry in std::fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            collect_missing_headers(&path, missing)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if !content.lines().take(3).any(|line| line == LICENSE_HEADER) {
                missing.push(path.display().to_string());
            }
        }
    }
    Ok(())
}

/// The tokenizer embeds this file, so a broken edit only shows up at runtime.
fn check_stop_words() -> Result<()> {
    let root = project_root()?;
    let content = std::fs::read_to_string(root.join("data/stop_words.json"))
        .context("Failed to read data/stop_words.json")?;
    validate_stop_words(&content).context("data/stop_words.json")
}

fn validate_stop_words(content: &str) -> Result<()> {
    let lists: BTreeMap<String, Vec<String>> =
        serde_json::from_str(content).context("not a map of word lists")?;

    for language in STOP_WORD_LANGUAGES {
        match lists.get(*language) {
            None => bail!("stop word list for {} is missing", language),
            Some(words) if words.is_empty() => bail!("stop word list for {} is empty", language),
            Some(_) => {}
        }
    }
    Ok(())
}
