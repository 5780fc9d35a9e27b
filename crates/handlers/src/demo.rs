// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Demonstration handlers (SPEC_FULL.md §1, §8 scenarios 5 and 6).
//!
//! Not a deliverable in itself — these exist so the registry, executor,
//! and pipeline engine have something real to dispatch in tests and in a
//! `pw` CLI invocation that doesn't embed its own handlers. Each handler
//! flavor (simple, submitter, mutable) gets at least one representative.

use crate::params;
use pw_config::{Config, PipelineNode};
use pw_core::{JobLogger, Scope, Status};
use pw_registry::{mutable_job, simple_job, submitter_job, Registry};

/// `demo.succeed`: always returns SUCCESS. The simple-handler flavor's
/// most basic case, and the one scenario 1 ("simple success") runs.
pub fn succeed(_parameters: &pw_config::Parameters, _logger: &JobLogger) -> Status {
    Status::Success
}

/// `demo.fail`: always returns ERROR. Pairs with `succeed` to exercise
/// scenario 2's bounded-restart accounting.
pub fn fail(_parameters: &pw_config::Parameters, _logger: &JobLogger) -> Status {
    Status::Error
}

/// `demo.echo`: logs its `message` parameter (already resolved against
/// scope by the time a handler sees it) and returns SUCCESS. Exists
/// mostly so `%{...}` arithmetic and type-inference resolution (scenarios
/// 3 and 4) have a handler whose parameters are worth looking at.
pub fn echo(parameters: &pw_config::Parameters, logger: &JobLogger) -> Status {
    match params::string(parameters, "message") {
        Ok(message) => {
            logger.info(format_args!("demo.echo: {message}"));
            Status::Success
        }
        Err(err) => {
            logger.error(format_args!("demo.echo: {err}"));
            Status::Error
        }
    }
}

/// `demo.rewrite_restart_policy`: the mutable-flavor handler behind
/// scenario 6. Hands back a pipeline node with `max_allowed_restarts` set
/// to unbounded and `curr_stage` rewound to `-1` — the engine's
/// `advanced()` then lands the successor back at stage `0` under the new
/// policy, per the scenario's literal vector.
pub fn rewrite_restart_policy(
    _parameters: &pw_config::Parameters,
    scope: &Scope,
    pipeline: &PipelineNode,
    _logger: &JobLogger,
) -> (Status, Scope, Option<PipelineNode>) {
    let rewritten = pipeline
        .clone()
        .with_max_allowed_restarts(-1)
        .with_curr_stage(-1);
    (Status::Success, scope.clone(), Some(rewritten))
}

/// `demo.matrix_expand`: the submitter-flavor handler behind scenario 5.
///
/// Reads a `template` stage parameter (a nested pipeline) and a `rows`
/// list parameter, and submits one copy of the template per row with the
/// parent scope overlaid by a single `row` variable bound to that row's
/// value. Returns FINAL once every row has been submitted, so the parent
/// pipeline keeps advancing past this stage rather than waiting on the
/// children it just fanned out.
pub fn matrix_expand(
    parameters: &pw_config::Parameters,
    submit: &pw_config::SubmitFn,
    scope: &Scope,
    _pipeline: &PipelineNode,
    logger: &JobLogger,
) -> Status {
    let template = match params::pipeline_template(parameters, "template") {
        Ok(t) => t,
        Err(err) => {
            logger.error(format_args!("demo.matrix_expand: {err}"));
            return Status::Error;
        }
    };
    let rows = match params::list(parameters, "rows") {
        Ok(r) => r,
        Err(err) => {
            logger.error(format_args!("demo.matrix_expand: {err}"));
            return Status::Error;
        }
    };

    for row in rows {
        let mut row_scope = scope.clone();
        row_scope.insert("row".to_string(), row.clone());
        submit(Config {
            scope: row_scope,
            root: template.clone(),
        });
    }

    logger.info(format_args!("demo.matrix_expand: submitted {} row(s)", rows.len()));
    Status::Final
}

pub fn register(registry: &Registry) {
    registry
        .register("demo.succeed", simple_job(succeed))
        .register("demo.fail", simple_job(fail))
        .register("demo.echo", simple_job(echo))
        .register("demo.rewrite_restart_policy", mutable_job(rewrite_restart_policy))
        .register("demo.matrix_expand", submitter_job(matrix_expand));
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
