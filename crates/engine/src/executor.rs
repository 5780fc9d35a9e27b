// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The job executor (C5): `run_job` and `run_mutable_job`.
//!
//! Both resolve parameters through the resolver, invoke the handler
//! inside a failure-trapping frame, and normalize the outcome. Neither
//! cares which of the three calling conventions (§4.3) is actually
//! registered under the job's dotted name — each adapts the handler it
//! finds to the shape its caller needs, discarding whatever the narrower
//! shape doesn't use. This is the Rust analogue of the source's decorator
//! adapters: the executor always reaches for the broadest call it can
//! make and narrows the result down.

use pw_config::{JobNode, PipelineNode};
use pw_core::{JobLogger, Scope, Status};
use pw_registry::{Handler, Registry};
use std::panic::AssertUnwindSafe;

/// Run a `job`-flavored stage (simple or submitter handler).
///
/// A handler registered as `mutable` can still be dispatched here (a job
/// node without the `mutable_job` tag that happens to resolve to a
/// mutable handler); its scope and pipeline-node rewrites are simply
/// discarded, leaving only the status.
pub fn run_job(
    job: &JobNode,
    registry: &Registry,
    pipeline: &PipelineNode,
    scope: &Scope,
    submit: &pw_config::SubmitFn,
    logger: &JobLogger,
) -> Status {
    let handler = match registry.resolve(&job.function) {
        Ok(h) => h,
        Err(err) => {
            logger.error(format_args!("handler resolution failed: {err}"));
            return Status::Error;
        }
    };

    let parameters = match pw_resolver::resolve_parameters(job.parameters.clone(), Some(scope)) {
        Ok(p) => p,
        Err(err) => {
            logger.error(format_args!("parameter resolution failed: {err}"));
            return Status::Error;
        }
    };

    let result = std::panic::catch_unwind(AssertUnwindSafe(|| match &handler {
        Handler::Simple(f) => f(&parameters, logger),
        Handler::Submitter(f) => f(&parameters, submit, scope, pipeline, logger),
        Handler::Mutable(f) => f(&parameters, scope, pipeline, logger).0,
    }));

    match result {
        Ok(status) => status,
        Err(_) => {
            logger.error("handler panicked");
            Status::Error
        }
    }
}

/// Run a `mutable_job`-flavored stage.
///
/// Returns `(status, pipeline_node, scope)`: the pipeline node and scope
/// the engine should carry forward for the remainder of this step. A
/// handler registered under a non-mutable flavor is still accepted (the
/// registry doesn't discriminate) but leaves the pipeline node and scope
/// unchanged, since a simple or submitter handler has no way to express a
/// rewrite.
pub fn run_mutable_job(
    job: &JobNode,
    registry: &Registry,
    pipeline: &PipelineNode,
    scope: &Scope,
    submit: &pw_config::SubmitFn,
    logger: &JobLogger,
) -> (Status, PipelineNode, Scope) {
    let handler = match registry.resolve(&job.function) {
        Ok(h) => h,
        Err(err) => {
            logger.error(format_args!("handler resolution failed: {err}"));
            return (Status::Error, pipeline.clone(), scope.clone());
        }
    };

    let parameters = match pw_resolver::resolve_parameters(job.parameters.clone(), Some(scope)) {
        Ok(p) => p,
        Err(err) => {
            logger.error(format_args!("parameter resolution failed: {err}"));
            return (Status::Error, pipeline.clone(), scope.clone());
        }
    };

    let result = std::panic::catch_unwind(AssertUnwindSafe(|| match &handler {
        Handler::Mutable(f) => f(&parameters, scope, pipeline, logger),
        Handler::Simple(f) => (f(&parameters, logger), scope.clone(), None),
        Handler::Submitter(f) => (
            f(&parameters, submit, scope, pipeline, logger),
            scope.clone(),
            None,
        ),
    }));

    match result {
        Ok((status, new_scope, pipeline_override)) => {
            (status, pipeline_override.unwrap_or_else(|| pipeline.clone()), new_scope)
        }
        Err(_) => {
            logger.error("handler panicked");
            (Status::Error, pipeline.clone(), scope.clone())
        }
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
