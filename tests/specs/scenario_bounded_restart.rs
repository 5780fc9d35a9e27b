// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC
//
// Scenario 2 (SPEC_FULL.md §8): a pipeline whose only job always returns
// ERROR, bounded by max_allowed_restarts. The process must still drain
// and exit cleanly once restarts are exhausted rather than looping
// forever — the bounded-restart accounting itself is covered at the unit
// level in crates/engine/src/pipeline_tests.rs.

use crate::prelude::*;

#[test]
fn exhausted_restarts_still_drain_the_process() {
    let (_dir, path) = config_file(
        r#"{
            "analysis_config": {
                "variables": {},
                "config": {
                    "stages": [{"type": "job", "function": "demo.fail"}],
                    "max_allowed_restarts": 2
                }
            },
            "submitter_config": {"type": "local"},
            "logging_config": {"type": "off"}
        }"#,
    );
    pw(&path).assert().success();
}
