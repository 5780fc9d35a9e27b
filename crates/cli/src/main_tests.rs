// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;

fn config_file(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    (dir, path)
}

#[test]
fn run_drains_a_valid_single_stage_config_to_completion() {
    let (_dir, path) = config_file(
        r#"{
            "analysis_config": {
                "variables": {},
                "config": {"stages": [{"type": "job", "function": "demo.succeed"}]}
            },
            "submitter_config": {"type": "local"},
            "logging_config": {"type": "off"}
        }"#,
    );
    run(Cli { config: path }).unwrap();
}

#[test]
fn run_rejects_malformed_json() {
    let (_dir, path) = config_file("not json");
    let err = run(Cli { config: path }).unwrap_err();
    assert!(err.to_string().contains("not valid JSON"));
}

#[test]
fn run_rejects_an_unresolvable_handler_name() {
    let (_dir, path) = config_file(
        r#"{
            "analysis_config": {
                "variables": {},
                "config": {"stages": [{"type": "job", "function": "no.such.function"}]}
            },
            "submitter_config": {"type": "local"}
        }"#,
    );
    let err = run(Cli { config: path }).unwrap_err();
    assert!(err.to_string().contains("validation failed"));
}

#[test]
fn read_config_reports_missing_files_with_context() {
    let missing = PathBuf::from("/no/such/path/config.json");
    let err = read_config(&missing).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}
