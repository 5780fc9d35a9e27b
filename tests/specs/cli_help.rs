// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::prelude::*;

#[test]
fn help_flag_prints_usage_and_exits_cleanly() {
    let output = pw_help();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "stdout was: {stdout}");
}

fn pw_help() -> std::process::Output {
    let mut cmd = assert_cmd::Command::cargo_bin("pw").expect("pw binary built");
    cmd.arg("--help");
    cmd.output().expect("pw binary runs")
}
