//! Custom cargo commands for the stable-match crate.
//!
//! Usage:
//!   cargo xtask verify           - Run full verification suite
//!   cargo xtask test             - Run all tests
//!   cargo xtask check            - Quick check (check + test + clippy)
//!   cargo xtask fuzz <target> [secs]
//!   cargo xtask kani             - Run Kani proofs
//!   cargo xtask bench            - Run criterion benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["instance_parsing", "verify_documents", "matcher_arbitrary"];

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("fuzz") => fuzz(args.get(1).map(String::as_str), args.get(2).map(String::as_str))?,
        Some("kani") => kani()?,
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
  verify             Run full verification suite (contracts + tests + clippy + kani)
  test               Run all Rust tests
  check              Quick check (cargo check + test + clippy)
  fuzz <target> [s]  Run one fuzz target for s seconds (default 60)
  kani               Run Kani model checking proofs
  bench              Run benchmarks

Fuzz targets: {}
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("stable-match Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking contract call sites...");
    check_contracts_wired()?;
    println!("✓ Every contract is called\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running tests without default features...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Serial build passed\n");

    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[5/5] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs done\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
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

/// Run one cargo-fuzz target (requires nightly and cargo-fuzz)
fn fuzz(target: Option<&str>, seconds: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("missing fuzz target; one of: {}", FUZZ_TARGETS.join(", "));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target '{}'; one of: {}", target, FUZZ_TARGETS.join(", "));
    }
    let seconds = seconds.unwrap_or("60");
    let max_time = format!("-max_total_time={}", seconds);

    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", &max_time])
        .current_dir(project_root()?)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
    }
    Ok(())
}

/// Run Kani proofs, skipping when Kani is not installed
fn kani() -> Result<()> {
    let proofs_dir = project_root()?.join("kani-proofs");

    let available = Command::new("cargo")
        .args(["kani", "--version"])
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false);
    if !available {
        println!("  (cargo kani not installed, skipping)");
        return Ok(());
    }

    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&proofs_dir)
        .status()
        .context("Failed to run cargo kani")?;

    if !status.success() {
        bail!("Kani proofs failed");
    }
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

/// Names of the `pub fn check_*` contracts in `src/contracts.rs`.
fn contract_names(contracts_rs: &str) -> Vec<String> {
    contracts_rs
        .lines()
        .filter_map(|line| line.trim().strip_prefix("pub fn check_"))
        .filter_map(|rest| rest.split('(').next())
        .map(|name| format!("check_{}", name))
        .collect()
}

/// Every contract must be called from some module other than contracts.rs.
fn check_contracts_wired() -> Result<()> {
    let src = project_root()?.join("src");
    let contracts = std::fs::read_to_string(src.join("contracts.rs"))
        .context("Failed to read src/contracts.rs")?;
    let names = contract_names(&contracts);
    if names.len() < 5 {
        bail!(
            "Expected at least 5 contracts, found {}. Someone may have removed invariant checks!",
            names.len()
        );
    }

    let mut sources = String::new();
    collect_sources(&src, &mut sources)?;
    for name in &names {
        if !sources.contains(&format!("{}(", name)) {
            bail!("contract {} is never called outside contracts.rs", name);
        }
    }
    Ok(())
}

fn collect_sources(dir: &Path, out: &mut String) -> Result<()> {
    for entry in std::fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            collect_sources(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "rs")
            && path.file_name().is_some_and(|name| name != "contracts.rs")
        {
            out.push_str(&std::fs::read_to_string(&path)?);
        }
    }
    Ok(())
}
