// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The pipeline engine (C6): advance a pipeline node exactly one stage,
//! then re-submit its successor.
//!
//! `run_pipeline` runs one stage and returns that stage's raw status,
//! exactly as it came back from the executor (or, for a nested pipeline
//! stage, exactly as it came back from the recursive call) — not the
//! outcome of `success`/`restart`, which are side effects on the queue.
//!
//! Nested pipelines are not flattened: reaching a `Stage::Pipeline` during
//! `curr_stage` dispatch recurses into [`run_pipeline`] on the *inner*
//! pipeline with the *same* submit function, so the inner pipeline's own
//! continuation (its next stage, or its restart) is submitted as an
//! independent, detached [`Config`] rooted at the inner pipeline alone —
//! not rewoven back into the outer tree. The outer pipeline's own
//! `success`/`restart` still runs against the *outer* node once this call
//! returns, advancing the outer cursor regardless of how much of the
//! inner pipeline has actually completed. This mirrors the branching
//! handler case (§4.6): the parent moves on while the submitted
//! continuation runs independently. It is carried over unchanged from
//! the reference implementation this system is modeled after.

use crate::executor::{run_job, run_mutable_job};
use pw_config::{Config, PipelineNode, Stage, SubmitFn};
use pw_core::{JobLogger, Scope, Status};
use pw_registry::Registry;
use std::borrow::Cow;

/// Advance `pipeline` by exactly one stage and return that stage's status.
pub fn run_pipeline(
    pipeline: &PipelineNode,
    scope: &Scope,
    registry: &Registry,
    submit: &SubmitFn,
    logger: &JobLogger,
) -> Status {
    let Ok(idx) = usize::try_from(pipeline.curr_stage()) else {
        return Status::Error;
    };
    let Some(stage) = pipeline.stages.get(idx) else {
        return Status::Error;
    };

    let (status, step_pipeline, step_scope): (Status, Cow<'_, PipelineNode>, Cow<'_, Scope>) =
        match stage {
            Stage::Pipeline(inner) => {
                let status = run_pipeline(inner, scope, registry, submit, logger);
                (status, Cow::Borrowed(pipeline), Cow::Borrowed(scope))
            }
            Stage::Job(job) if job.mutable => {
                let (status, new_pipeline, new_scope) =
                    run_mutable_job(job, registry, pipeline, scope, submit, logger);
                (status, Cow::Owned(new_pipeline), Cow::Owned(new_scope))
            }
            Stage::Job(job) => {
                let status = run_job(job, registry, pipeline, scope, submit, logger);
                (status, Cow::Borrowed(pipeline), Cow::Borrowed(scope))
            }
        };

    match status {
        Status::Error => restart(&step_pipeline, &step_scope, submit),
        s if !s.is_final() => {
            logger.error(format_args!("handler returned non-final status {s}; contract breach"));
            return Status::Error;
        }
        _ => success(&step_pipeline, &step_scope, submit),
    }

    status
}

/// Produce the successor after a stage finishes successfully: cursor
/// advanced by one. Submitted only if the pipeline isn't yet complete.
fn success(pipeline: &PipelineNode, scope: &Scope, submit: &SubmitFn) {
    let advanced = pipeline.clone().advanced();
    if !advanced.is_completed() {
        submit(Config {
            scope: scope.clone(),
            root: advanced,
        });
    }
}

/// Produce the successor after a stage errors, if the pipeline still has
/// restarts available: cursor reset to 0, restart counter incremented.
fn restart(pipeline: &PipelineNode, scope: &Scope, submit: &SubmitFn) {
    if pipeline.restart_available() {
        submit(Config {
            scope: scope.clone(),
            root: pipeline.clone().restarted(),
        });
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
