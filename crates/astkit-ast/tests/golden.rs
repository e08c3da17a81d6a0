// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Golden file tests for source rendering.
//!
//! Each fixture in `tests/golden/trees/` is a JSON document holding a dialect
//! and a serialized tree. The rendered source must match the file of the
//! same name in `tests/golden/output/`.
//!
//! # Updating Golden Files
//!
//! When making intentional changes to rendering behavior:
//! ```bash
//! ASTKIT_UPDATE_GOLDEN=1 cargo nextest run -p astkit-ast golden
//! git diff tests/golden/  # Review changes
//! ```

use difference::assert_diff;
use itertools::Itertools;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use astkit_ast::{Mod, PythonVersion, SourceRenderer};

#[derive(Debug, Deserialize)]
struct Fixture {
    version: PythonVersion,
    tree: Mod,
}

fn golden_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
}

fn update_mode() -> bool {
    std::env::var("ASTKIT_UPDATE_GOLDEN").is_ok()
}

/// Helper to visualize whitespace differences in test output
fn visualize(s: &str) -> String {
    s.replace(' ', "▩").lines().join("↩\n")
}

fn load_fixture(name: &str) -> Fixture {
    let path = golden_dir().join("trees").join(format!("{}.json", name));
    let json = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {:?}: {}", path, e));
    serde_json::from_str(&json)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {:?}: {}", path, e))
}

fn assert_golden(name: &str) {
    let fixture = load_fixture(name);
    let actual = SourceRenderer::new(fixture.version)
        .render_module(&fixture.tree)
        .unwrap_or_else(|e| panic!("Failed to render {}: {}", name, e));

    let golden_path = golden_dir().join("output").join(format!("{}.py", name));
    if update_mode() {
        fs::create_dir_all(golden_dir().join("output")).expect("Failed to create output directory");
        fs::write(&golden_path, &actual).expect("Failed to write golden file");
        eprintln!("Updated golden file: {:?}", golden_path);
        return;
    }

    let expected = fs::read_to_string(&golden_path)
        .unwrap_or_else(|e| panic!("Failed to read golden file {:?}: {}", golden_path, e));
    if actual != expected {
        assert_diff!(&visualize(&expected), &visualize(&actual), "\n", 0);
    }
}

#[test]
fn golden_modern() {
    assert_golden("modern");
}

#[test]
fn golden_legacy() {
    assert_golden("legacy");
}

#[test]
fn golden_expressions() {
    assert_golden("expressions");
}

#[test]
fn golden_patterns() {
    assert_golden("patterns");
}

#[test]
fn golden_trees_roundtrip_through_json() {
    for name in ["modern", "legacy", "expressions", "patterns"] {
        let fixture = load_fixture(name);
        let json = serde_json::to_string(&fixture.tree).unwrap();
        let back: Mod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fixture.tree, "{} changed through JSON", name);
    }
}
