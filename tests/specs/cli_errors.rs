// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::prelude::*;

fn run_and_capture_stderr(config: &std::path::Path) -> (bool, String) {
    let output = pw(config).output().expect("pw binary runs");
    (output.status.success(), String::from_utf8_lossy(&output.stderr).into_owned())
}

#[test]
fn missing_config_file_exits_nonzero_with_a_clear_message() {
    let (succeeded, stderr) = run_and_capture_stderr(std::path::Path::new("/no/such/config.json"));
    assert!(!succeeded);
    assert!(stderr.contains("failed to read config file"), "stderr was: {stderr}");
}

#[test]
fn malformed_json_exits_nonzero() {
    let (_dir, path) = config_file("not json at all");
    let (succeeded, stderr) = run_and_capture_stderr(&path);
    assert!(!succeeded);
    assert!(stderr.contains("not valid JSON"), "stderr was: {stderr}");
}

#[test]
fn unresolvable_handler_name_fails_validation() {
    let (_dir, path) = config_file(
        r#"{
            "analysis_config": {
                "variables": {},
                "config": {"stages": [{"type": "job", "function": "no.such.function"}]}
            },
            "submitter_config": {"type": "local"}
        }"#,
    );
    let (succeeded, stderr) = run_and_capture_stderr(&path);
    assert!(!succeeded);
    assert!(stderr.contains("config validation failed"), "stderr was: {stderr}");
}

#[test]
fn empty_stage_list_fails_validation() {
    let (_dir, path) = config_file(
        r#"{
            "analysis_config": {
                "variables": {},
                "config": {"stages": []}
            },
            "submitter_config": {"type": "local"}
        }"#,
    );
    let (succeeded, _stderr) = run_and_capture_stderr(&path);
    assert!(!succeeded);
}
