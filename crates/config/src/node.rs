// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validated, execution-ready configuration tree.
//!
//! Every value here has already passed through [`crate::validate`]: handler
//! names are known to resolve, indices are in range, and restart counters
//! respect their bound. Treat these types as immutable — there is
//! deliberately no `&mut self` API that rewrites a field in place. Advancing
//! a pipeline is always "consume the old value, produce a new one"
//! (`advanced`, `restarted`, `with_curr_stage`, ...), matching the
//! continuation-passing scheduling the engine relies on.

use pw_core::{Primitive, Scope, Status};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pw_core::define_id! {
    /// Unique identifier for a job instance.
    pub struct JobId;
}

pw_core::define_id! {
    /// Unique identifier for a pipeline instance.
    pub struct PipelineId;
}

/// A parameter value: a primitive, an ordered list of primitives, or a
/// nested, already-validated stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Primitive(Primitive),
    List(Vec<Primitive>),
    Stage(Box<Stage>),
}

pub type Parameters = Option<HashMap<String, ParamValue>>;

/// A validated job node. `mutable` records whether this was declared as
/// `type: "mutable_job"` (run through the mutable executor path) or
/// `type: "job"` (run through the simple/submitter path) — the flavor that
/// actually dispatches (simple vs. submitter) is a property of the handler
/// registered under `function`, not of this node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobNode {
    pub id: JobId,
    pub name: String,
    pub function: String,
    pub parameters: Parameters,
    pub mutable: bool,
}

/// A validated pipeline node: an ordered list of stages plus restart policy
/// and cursor state.
///
/// `curr_stage`, `status`, `max_allowed_restarts`, and `curr_restarts` are
/// deliberately private: every other field here is a fact fixed at
/// construction, but these four are the moving parts the engine advances,
/// and frozen-after-construction semantics only hold if nothing outside
/// this module can poke them in place. Read them through the accessors and
/// move them through [`advanced`](Self::advanced), [`restarted`](Self::restarted),
/// or the `with_*` builders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineNode {
    pub id: PipelineId,
    pub name: String,
    pub stages: Vec<Stage>,
    curr_stage: i64,
    status: Status,
    max_allowed_restarts: i64,
    curr_restarts: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stage {
    Job(JobNode),
    Pipeline(PipelineNode),
}

impl PipelineNode {
    /// Construct a fresh pipeline node, cursor at 0, status `READY`, no
    /// restarts yet used.
    pub fn new(
        id: PipelineId,
        name: String,
        stages: Vec<Stage>,
        max_allowed_restarts: i64,
    ) -> Self {
        Self {
            id,
            name,
            stages,
            curr_stage: 0,
            status: Status::Ready,
            max_allowed_restarts,
            curr_restarts: 0,
        }
    }

    /// Construct a pipeline node from every field, including cursor and
    /// restart state already in progress. Used by [`crate::validate`] to
    /// assemble a node from a raw, already-range-checked document.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: PipelineId,
        name: String,
        stages: Vec<Stage>,
        curr_stage: i64,
        status: Status,
        max_allowed_restarts: i64,
        curr_restarts: i64,
    ) -> Self {
        Self {
            id,
            name,
            stages,
            curr_stage,
            status,
            max_allowed_restarts,
            curr_restarts,
        }
    }

    pub fn curr_stage(&self) -> i64 {
        self.curr_stage
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn max_allowed_restarts(&self) -> i64 {
        self.max_allowed_restarts
    }

    pub fn curr_restarts(&self) -> i64 {
        self.curr_restarts
    }

    /// Replace the cursor. Pure — consumes `self`.
    pub fn with_curr_stage(mut self, curr_stage: i64) -> Self {
        self.curr_stage = curr_stage;
        self
    }

    /// Replace the status. Pure — consumes `self`.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Replace the restart bound. Pure — consumes `self`.
    pub fn with_max_allowed_restarts(mut self, max_allowed_restarts: i64) -> Self {
        self.max_allowed_restarts = max_allowed_restarts;
        self
    }

    /// Replace the restart counter. Pure — consumes `self`.
    pub fn with_curr_restarts(mut self, curr_restarts: i64) -> Self {
        self.curr_restarts = curr_restarts;
        self
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// The stage at `curr_stage`, or `None` if the cursor is out of range
    /// (including the completed state `curr_stage == stage_count()`).
    pub fn current_stage(&self) -> Option<&Stage> {
        usize::try_from(self.curr_stage)
            .ok()
            .and_then(|i| self.stages.get(i))
    }

    pub fn is_completed(&self) -> bool {
        self.curr_stage >= 0 && self.curr_stage as usize >= self.stage_count()
    }

    /// Produce the successor value after a successful stage: cursor advanced
    /// by one, restart counter untouched. Pure — consumes `self`.
    pub fn advanced(mut self) -> Self {
        self.curr_stage += 1;
        self
    }

    /// Produce the successor value after exhausting a stage's attempts and
    /// being granted a restart: cursor reset to 0, restart counter
    /// incremented, status reset to `READY`. Pure — consumes `self`.
    pub fn restarted(mut self) -> Self {
        self.curr_restarts += 1;
        self.curr_stage = 0;
        self.status = Status::Ready;
        self
    }

    /// True if another restart is still permitted (unbounded at -1, or the
    /// counter hasn't yet reached the maximum).
    pub fn restart_available(&self) -> bool {
        self.max_allowed_restarts == -1 || self.curr_restarts < self.max_allowed_restarts
    }
}

/// A variable scope plus a root pipeline: the unit that moves through the
/// submission queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scope: Scope,
    pub root: PipelineNode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitterConfig {
    pub kind: SubmitterKind,
    pub name: String,
    pub num_concurrent_jobs: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitterKind {
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoggingKind {
    Off,
    Console,
    File,
    Remote,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub kind: LoggingKind,
    pub level: Option<i32>,
    pub directory: Option<String>,
}

/// A configuration plus submitter and logging wiring: the document the
/// entry point accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitialConfig {
    pub config: Config,
    pub submitter_config: SubmitterConfig,
    pub logging_config: LoggingConfig,
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
