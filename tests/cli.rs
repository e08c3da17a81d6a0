//! End-to-end tests for the astkit binary.
//!
//! Each test runs in its own temp directory so no stray `astkit.toml`
//! is picked up, and with the dialect and log environment cleared.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const POSITIONED_TREE: &str = r#"{
  "kind": "Module",
  "body": [
    {
      "kind": "Assign",
      "targets": [{"kind": "Name", "id": "x", "position": {"lineno": 1, "col_offset": 0}}],
      "value": {"kind": "Constant", "value": {"int": 1}, "position": {"lineno": 1, "col_offset": 4}},
      "position": {"lineno": 1, "col_offset": 0}
    },
    {
      "kind": "Print",
      "dest": null,
      "values": [{"kind": "Name", "id": "x"}],
      "nl": true,
      "position": {"lineno": 2, "col_offset": 0}
    }
  ]
}"#;

const MODERN_TREE: &str = r#"{
  "kind": "Module",
  "body": [
    {
      "kind": "If",
      "test": {"kind": "Name", "id": "ready"},
      "body": [{"kind": "Expr", "value": {"kind": "Call", "func": {"kind": "Name", "id": "go"}}}],
      "orelse": []
    }
  ]
}"#;

/// Get the path to the astkit binary
fn astkit_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_astkit"))
}

fn write_tree(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, json).expect("failed to write tree");
    path
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(astkit_binary())
        .args(args)
        .current_dir(dir)
        .env_remove("ASTKIT_PYTHON_VERSION")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run astkit")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).unwrap_or_else(|e| {
        panic!(
            "stderr is not JSON ({}): {}",
            e,
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

#[test]
fn render_prints_source() {
    let temp = tempfile::tempdir().unwrap();
    write_tree(temp.path(), "tree.json", MODERN_TREE);

    let output = run(temp.path(), &["render", "tree.json"]);
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout(&output), "if ready:\n    go()\n");
}

#[test]
fn render_honours_indent_width_flag() {
    let temp = tempfile::tempdir().unwrap();
    write_tree(temp.path(), "tree.json", MODERN_TREE);

    let output = run(temp.path(), &["render", "tree.json", "--indent-width", "2"]);
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout(&output), "if ready:\n  go()\n");
}

#[test]
fn render_uses_config_file() {
    let temp = tempfile::tempdir().unwrap();
    write_tree(temp.path(), "tree.json", MODERN_TREE);
    fs::write(
        temp.path().join("astkit.toml"),
        "[render]\nindent_width = 3\n",
    )
    .unwrap();

    let output = run(temp.path(), &["render", "tree.json"]);
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout(&output), "if ready:\n   go()\n");
}

#[test]
fn render_writes_output_file() {
    let temp = tempfile::tempdir().unwrap();
    write_tree(temp.path(), "tree.json", MODERN_TREE);

    let output = run(temp.path(), &["render", "tree.json", "-o", "out.py"]);
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout(&output), "");
    assert_eq!(
        fs::read_to_string(temp.path().join("out.py")).unwrap(),
        "if ready:\n    go()\n"
    );
}

#[test]
fn dialect_mismatch_exits_with_render_code() {
    let temp = tempfile::tempdir().unwrap();
    write_tree(temp.path(), "tree.json", POSITIONED_TREE);

    let output = run(
        temp.path(),
        &["render", "tree.json", "--python-version", "3.12"],
    );
    assert_eq!(output.status.code(), Some(4));
    assert_eq!(stdout(&output), "");
    let error = stderr_json(&output);
    assert_eq!(error["status"], "error");
    assert_eq!(error["code"], 4);
    assert_eq!(
        error["message"],
        "render error: no render rule for node kind 'Print' under Python 3.12"
    );
}

#[test]
fn config_version_applies_without_flag() {
    let temp = tempfile::tempdir().unwrap();
    write_tree(temp.path(), "tree.json", POSITIONED_TREE);
    fs::write(
        temp.path().join("astkit.toml"),
        "[render]\npython_version = \"3.12\"\n",
    )
    .unwrap();

    let output = run(temp.path(), &["render", "tree.json"]);
    assert_eq!(output.status.code(), Some(4));

    let output = run(
        temp.path(),
        &["render", "tree.json", "--python-version", "permissive"],
    );
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout(&output), "x = 1\nprint x\n");
}

#[test]
fn missing_tree_exits_with_not_found() {
    let temp = tempfile::tempdir().unwrap();
    let output = run(temp.path(), &["render", "absent.json"]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stderr_json(&output)["code"], 3);
}

#[test]
fn invalid_json_exits_with_invalid_arguments() {
    let temp = tempfile::tempdir().unwrap();
    write_tree(temp.path(), "tree.json", "{\"kind\": \"Nonsense\"}");
    let output = run(temp.path(), &["count", "tree.json"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn broken_config_exits_with_invalid_arguments() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("astkit.toml"), "[render\n").unwrap();
    let output = run(temp.path(), &["kinds"]);
    assert_eq!(output.status.code(), Some(2));
}

fn family_names(output: &Output) -> Vec<String> {
    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    response["families"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["family"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn kinds_without_family_lists_helper_families() {
    let temp = tempfile::tempdir().unwrap();
    let output = run(temp.path(), &["kinds", "--python-version", "3.12"]);
    assert!(output.status.success(), "{:?}", output);
    let names = family_names(&output);
    for family in [
        "mod",
        "stmt",
        "expr",
        "pattern",
        "type_param",
        "comprehension",
        "arguments",
        "arg",
        "keyword",
        "alias",
        "withitem",
        "match_case",
    ] {
        assert!(names.iter().any(|name| name == family), "{} in {:?}", family, names);
    }

    let output = run(temp.path(), &["kinds", "--python-version", "2.7"]);
    assert!(output.status.success(), "{:?}", output);
    let names = family_names(&output);
    assert!(names.iter().any(|name| name == "comprehension"));
    assert!(names.iter().any(|name| name == "alias"));
    assert!(!names.iter().any(|name| name == "withitem"));
    assert!(!names.iter().any(|name| name == "match_case"));
}

#[test]
fn kinds_lists_family_for_dialect() {
    let temp = tempfile::tempdir().unwrap();
    let output = run(
        temp.path(),
        &["kinds", "--family", "mod", "--python-version", "3.12"],
    );
    assert!(output.status.success(), "{:?}", output);

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["version"], "3.12");
    let families = response["families"].as_array().unwrap();
    assert_eq!(families.len(), 1);
    assert_eq!(families[0]["family"], "mod");
    let names: Vec<&str> = families[0]["kinds"]
        .as_array()
        .unwrap()
        .iter()
        .map(|kind| kind["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Module"));
    assert!(names.contains(&"Expression"));
    assert!(!names.contains(&"Suite"));
}

#[test]
fn adjust_shifts_positions() {
    let temp = tempfile::tempdir().unwrap();
    write_tree(temp.path(), "tree.json", POSITIONED_TREE);

    let output = run(
        temp.path(),
        &["adjust", "tree.json", "--lines", "10", "--cols", "2"],
    );
    assert!(output.status.success(), "{:?}", output);

    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let assign = &tree["body"][0];
    assert_eq!(assign["position"]["lineno"], 11);
    assert_eq!(assign["position"]["col_offset"], 2);
    assert_eq!(assign["value"]["position"]["col_offset"], 6);
    assert_eq!(tree["body"][1]["position"]["lineno"], 12);
    // nodes without a position stay without one
    assert!(tree["body"][1]["values"][0].get("position").is_none());
}

#[test]
fn adjust_check_rejects_tree_outside_dialect() {
    let temp = tempfile::tempdir().unwrap();
    write_tree(temp.path(), "tree.json", POSITIONED_TREE);

    let output = run(
        temp.path(),
        &["adjust", "tree.json", "--check", "--python-version", "3.12"],
    );
    assert_eq!(output.status.code(), Some(4));
    assert_eq!(stdout(&output), "");
}

#[test]
fn count_reports_histogram() {
    let temp = tempfile::tempdir().unwrap();
    write_tree(temp.path(), "tree.json", POSITIONED_TREE);

    let output = run(temp.path(), &["count", "tree.json"]);
    assert!(output.status.success(), "{:?}", output);

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["kinds"]["Name"], 2);
    assert_eq!(response["kinds"]["Module"], 1);
    assert_eq!(response["kinds"]["Assign"], 1);
    assert_eq!(response["kinds"]["Print"], 1);
    assert_eq!(response["kinds"]["Constant"], 1);
    assert_eq!(response["total"], 6);
}
