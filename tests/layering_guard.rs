//! Layering guardrails for the workspace crates.
//!
//! - `enforest_core` holds pure vocabulary data and must not have any `[dependencies]`.
//! - `enforest_syntax` may depend on `enforest_core` but never on the root `enforest` facade.
//!
//! These tests scan the crate manifests directly, so a violation fails before anything else is looked at.

/// Return the dependency names listed in a manifest's `[dependencies]` table.
fn main_dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            if line == "[dependencies]" {
                in_dependencies = true;
                continue;
            }
            // Any new section after `[dependencies]` ends the scan window.
            if in_dependencies {
                break;
            }
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }

    names
}

#[test]
fn core_registries_have_no_dependencies() {
    let deps = main_dependencies(include_str!("../crates/enforest_core/Cargo.toml"));
    assert!(deps.is_empty(), "`enforest_core` must stay dependency-free, found: {:?}", deps);
}

#[test]
fn syntax_crate_does_not_depend_on_facade() {
    let deps = main_dependencies(include_str!("../crates/enforest_syntax/Cargo.toml"));
    assert!(deps.iter().any(|d| d == "enforest_core"));
    assert!(
        !deps.iter().any(|d| d == "enforest"),
        "`enforest_syntax` must not depend on the root `enforest` crate"
    );
}

#[test]
fn facade_depends_on_both_layers() {
    let deps = main_dependencies(include_str!("../Cargo.toml"));
    assert!(deps.iter().any(|d| d == "enforest_core"));
    assert!(deps.iter().any(|d| d == "enforest_syntax"));
}
