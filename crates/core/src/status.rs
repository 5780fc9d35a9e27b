// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status algebra: the terminal/non-terminal values every job and pipeline
//! step resolves to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of running one job or one pipeline stage.
///
/// `Final` is an alias for "terminal, no further action required by the
/// engine": it exists for handlers that have already arranged their own
/// continuation (e.g. a matrix-expand handler that submitted its own child
/// pipelines) and want the engine to stop advancing the *current* stage
/// without treating it as either success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Error,
    Ready,
    Starting,
    Running,
    Success,
    Final,
}

impl Status {
    /// True if this status implies the unit of work has finished running and
    /// should not have any open resources.
    pub fn is_final(self) -> bool {
        matches!(self, Status::Error | Status::Success | Status::Final)
    }

    /// True if a pipeline or job in this status is eligible to be started.
    pub fn is_startable(self) -> bool {
        matches!(self, Status::Ready)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Error => "error",
            Status::Ready => "ready",
            Status::Starting => "starting",
            Status::Running => "running",
            Status::Success => "success",
            Status::Final => "final",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
