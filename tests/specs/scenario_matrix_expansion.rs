// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC
//
// Scenario 5 (SPEC_FULL.md §8): a submitter-flavor handler fans a table
// out into one child pipeline per row, each with the row value overlaid
// into scope, while the parent keeps advancing to completion.

use crate::prelude::*;

#[test]
fn matrix_expand_fans_out_one_child_per_row_and_parent_still_completes() {
    let (_dir, path) = config_file(
        r#"{
            "analysis_config": {
                "variables": {},
                "config": {"stages": [
                    {
                        "type": "job",
                        "function": "demo.matrix_expand",
                        "parameters": {
                            "template": {
                                "type": "pipeline",
                                "stages": [{
                                    "type": "job",
                                    "function": "demo.echo",
                                    "parameters": {"message": "%{row}"}
                                }]
                            },
                            "rows": ["x", "y", "z"]
                        }
                    },
                    {"type": "job", "function": "demo.succeed"}
                ]}
            },
            "submitter_config": {"type": "local", "num_concurrent_jobs": 2},
            "logging_config": {"type": "console"}
        }"#,
    );
    let stderr = stderr_of(&path);
    for row in ["x", "y", "z"] {
        assert!(stderr.contains(&format!("demo.echo: {row}")), "stderr was: {stderr}");
    }
}
