// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC
//
// Scenario 7 (SPEC_FULL.md §8): a small pool (num_concurrent_jobs = 4)
// fans out to many independent child pipelines and must still drain.
// The no-double-execution / no-worker-left-executing guarantees are
// covered precisely at the unit level in
// crates/submitter/src/pool_tests.rs; this is the end-to-end confirmation
// that the whole CLI path doesn't deadlock or hang under that load.

use crate::prelude::*;

#[test]
fn fifty_fanned_out_pipelines_drain_under_a_bounded_pool() {
    let rows: Vec<String> = (0..50).map(|i| format!("\"row-{i}\"")).collect();
    let (_dir, path) = config_file(&format!(
        r#"{{
            "analysis_config": {{
                "variables": {{}},
                "config": {{"stages": [{{
                    "type": "job",
                    "function": "demo.matrix_expand",
                    "parameters": {{
                        "template": {{
                            "type": "pipeline",
                            "stages": [{{"type": "job", "function": "demo.succeed"}}]
                        }},
                        "rows": [{}]
                    }}
                }}]}}
            }},
            "submitter_config": {{"type": "local", "num_concurrent_jobs": 4}},
            "logging_config": {{"type": "off"}}
        }}"#,
        rows.join(", ")
    ));
    pw(&path).assert().success();
}
