// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC
//
// Scenarios 3 and 4 (SPEC_FULL.md §8): arithmetic resolution and type
// inference, observed end to end through `demo.echo`'s log line. The
// arithmetic/inference algorithms themselves are exercised far more
// exhaustively in crates/resolver's unit tests; this only confirms the
// resolved value actually reaches a handler through the full CLI path.

use crate::prelude::*;

#[test]
fn arithmetic_expression_resolves_before_reaching_the_handler() {
    let (_dir, path) = config_file(
        r#"{
            "analysis_config": {
                "variables": {"a": 1, "b": 2, "bb": 12},
                "config": {"stages": [{
                    "type": "job",
                    "function": "demo.echo",
                    "parameters": {"message": "%{a*b - bb}"}
                }]}
            },
            "submitter_config": {"type": "local"},
            "logging_config": {"type": "console"}
        }"#,
    );
    let stderr = stderr_of(&path);
    assert!(stderr.contains("demo.echo: -10"), "stderr was: {stderr}");
}

#[test]
fn boolean_substring_inference_resolves_true_and_false() {
    let (_dir, path) = config_file(
        r#"{
            "analysis_config": {
                "variables": {"h": "faLsE"},
                "config": {"stages": [{
                    "type": "job",
                    "function": "demo.echo",
                    "parameters": {"message": "%{h}"}
                }]}
            },
            "submitter_config": {"type": "local"},
            "logging_config": {"type": "console"}
        }"#,
    );
    let stderr = stderr_of(&path);
    assert!(stderr.contains("demo.echo: False"), "stderr was: {stderr}");
}
