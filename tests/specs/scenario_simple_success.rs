// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC
//
// Scenario 1 (SPEC_FULL.md §8): a pipeline with one job returning SUCCESS
// runs to completion and the process exits cleanly.

use crate::prelude::*;

#[test]
fn single_job_pipeline_succeeds() {
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
    pw(&path).assert().success();
}

#[test]
fn multi_stage_pipeline_runs_every_stage_to_completion() {
    let (_dir, path) = config_file(
        r#"{
            "analysis_config": {
                "variables": {},
                "config": {"stages": [
                    {"type": "job", "function": "demo.succeed"},
                    {"type": "job", "function": "demo.succeed"},
                    {"type": "job", "function": "demo.succeed"}
                ]}
            },
            "submitter_config": {"type": "local", "num_concurrent_jobs": 2},
            "logging_config": {"type": "off"}
        }"#,
    );
    pw(&path).assert().success();
}
