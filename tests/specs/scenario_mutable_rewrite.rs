// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC
//
// Scenario 6 (SPEC_FULL.md §8): a mutable-flavor handler hands back a
// pipeline override that rewinds the cursor and widens the restart
// policy; the engine advances it and the successor carries the rewrite
// forward. The exact `curr_stage`/`max_allowed_restarts` bookkeeping is
// covered at the unit level in crates/engine/src/pipeline_tests.rs; this
// confirms the whole CLI path still drains rather than getting stuck.

use crate::prelude::*;

#[test]
fn mutable_rewrite_stage_still_drains_to_completion() {
    let (_dir, path) = config_file(
        r#"{
            "analysis_config": {
                "variables": {},
                "config": {"stages": [
                    {"type": "mutable_job", "function": "demo.rewrite_restart_policy"},
                    {"type": "job", "function": "demo.succeed"}
                ]}
            },
            "submitter_config": {"type": "local"},
            "logging_config": {"type": "off"}
        }"#,
    );
    pw(&path).assert().success();
}
