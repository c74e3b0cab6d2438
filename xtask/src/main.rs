//! Development automation tasks for the Diwan workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! User-facing output goes through `println!`/`eprintln!`.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};
use std::{env, fs};

use anyhow::Context;

mod features;

/// Crates checked individually during CI, in dependency order
const WORKSPACE_CRATES: &[&str] = &["diwan-domain", "diwan-core", "diwan-infra", "diwan-app"];

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("test") => run_test(),
        Some("bench") => run_bench(),
        Some("codegen") => run_codegen(),
        Some("test-features") => features::test_feature_matrix(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow::anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("Diwan Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    println!("    ci             Run all CI checks (fmt, clippy, per-crate check, test)");
    println!("    fmt            Check Rust code formatting");
    println!("    clippy         Run Clippy lints");
    println!("    test           Run all tests");
    println!("    bench          Run the ranking aggregator benchmark");
    println!("    codegen        Generate TypeScript types from diwan-domain");
    println!("    test-features  Verify the ts-gen feature matrix compiles");
    println!("    help           Show this help message");
}

fn cargo(args: &[&str], failure: &str) -> anyhow::Result<()> {
    let status = Command::new("cargo").args(args).status().context("Failed to run cargo")?;
    if !status.success() {
        anyhow::bail!("{failure}");
    }
    Ok(())
}

/// Run all CI checks in sequence
fn run_ci() -> anyhow::Result<()> {
    println!("==> Running CI checks...\n");

    println!("==> Step 1/4: Checking Rust format...");
    run_fmt()?;

    println!("\n==> Step 2/4: Running Clippy...");
    run_clippy()?;

    println!("\n==> Step 3/4: Checking each crate in isolation...");
    for name in WORKSPACE_CRATES {
        cargo(&["check", "-p", name, "--all-targets"], &format!("{name} check failed"))?;
        println!("✓ {name}");
    }

    println!("\n==> Step 4/4: Running tests...");
    run_test()?;

    println!("\n✓ All CI checks passed!");
    Ok(())
}

fn run_fmt() -> anyhow::Result<()> {
    cargo(
        &["fmt", "--all", "--", "--check"],
        "Format check failed. Run 'cargo fmt --all' to fix.",
    )
}

fn run_clippy() -> anyhow::Result<()> {
    cargo(
        &["clippy", "--workspace", "--all-targets", "--all-features", "--", "-D", "warnings"],
        "Clippy run failed. See output above.",
    )
}

fn run_test() -> anyhow::Result<()> {
    cargo(&["test", "--workspace", "--all-features"], "Tests failed")
}

fn run_bench() -> anyhow::Result<()> {
    cargo(&["bench", "-p", "diwan-core", "--bench", "ranking_aggregator"], "Benchmark failed")
}

/// Generate TypeScript bindings and an index that re-exports them
fn run_codegen() -> anyhow::Result<()> {
    println!("==> Generating TypeScript types from Rust...\n");

    println!("Step 1/2: Running ts-gen tests to export bindings...");
    cargo(
        &["test", "-p", "diwan-domain", "--features", "ts-gen", "--lib"],
        "TypeScript generation tests failed",
    )?;

    let bindings_dir = PathBuf::from("crates/domain/bindings");
    if !bindings_dir.exists() {
        anyhow::bail!(
            "Bindings directory not found at {}. TypeScript generation may have failed.",
            bindings_dir.display()
        );
    }

    println!("\nStep 2/2: Generating index.ts...");
    generate_index_ts(&bindings_dir)?;

    println!("\n✓ TypeScript type generation complete: {}", bindings_dir.display());
    Ok(())
}

/// Write `index.ts` exporting every generated type in `types_dir`
fn generate_index_ts(types_dir: &Path) -> anyhow::Result<()> {
    let entries = fs::read_dir(types_dir).context("Failed to read bindings directory")?;

    let mut type_names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter_map(|e| {
            let path = e.path();
            let stem = path.file_stem()?.to_str()?.to_string();
            let is_ts = path.extension()?.to_str()? == "ts";
            (is_ts && stem != "index").then_some(stem)
        })
        .collect();
    type_names.sort();

    let mut content = String::from(
        "// Generated by ts-rs via: cargo xtask codegen\n\
         // DO NOT EDIT MANUALLY - changes will be overwritten\n\n",
    );
    for name in &type_names {
        let _ = writeln!(content, "export type {{ {name} }} from './{name}';");
    }

    let index_path = types_dir.join("index.ts");
    fs::write(&index_path, content)
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    println!("  Generated index.ts with {} exports", type_names.len());
    Ok(())
}
