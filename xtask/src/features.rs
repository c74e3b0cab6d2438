use std::process::Command;

use anyhow::{Context, Result};

/// `(package, features)` pairs that must compile
const FEATURE_COMBINATIONS: &[(&str, &[&str])] = &[
    ("diwan-domain", &[]),
    ("diwan-domain", &["ts-gen"]),
    ("diwan-app", &[]),
    ("diwan-app", &["ts-gen"]),
];

/// Check that every listed feature combination compiles.
pub fn test_feature_matrix() -> Result<()> {
    let total = FEATURE_COMBINATIONS.len();
    println!("Testing {total} feature combinations...");

    for (index, (package, features)) in FEATURE_COMBINATIONS.iter().enumerate() {
        let joined = features.join(",");
        let label = if features.is_empty() { format!("{package} (default)") } else { format!("{package} [{joined}]") };

        println!("\n[{}/{total}] cargo check {label}", index + 1);

        let mut command = Command::new("cargo");
        command.args(["check", "-p", package]);
        if !features.is_empty() {
            command.args(["--features", joined.as_str()]);
        }

        let status =
            command.status().with_context(|| format!("Failed to run cargo check for {label}"))?;
        if !status.success() {
            anyhow::bail!("Feature combination {label} failed to compile");
        }

        println!("✅ {label}");
    }

    println!("\n✅ All {total} feature combinations compile successfully!");
    Ok(())
}
