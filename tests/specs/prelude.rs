// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for the black-box `pw` binary tests.

use assert_cmd::Command;
use std::path::PathBuf;

/// Write `contents` to a fresh temp file and return the directory (whose
/// drop removes it) alongside the file's path.
pub fn config_file(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, contents).expect("write config file");
    (dir, path)
}

/// A `pw <config>` invocation against the built binary.
pub fn pw(config: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("pw").expect("pw binary built");
    cmd.arg(config);
    cmd
}

/// Run to completion and return its captured stderr as text, for
/// scenarios that need to observe resolved parameter values through the
/// `tracing` log rather than just the exit code.
pub fn stderr_of(config: &std::path::Path) -> String {
    let output = pw(config).output().expect("pw binary runs");
    assert!(output.status.success(), "pw exited with {:?}", output.status);
    String::from_utf8(output.stderr).expect("stderr is utf-8")
}
