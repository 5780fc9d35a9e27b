// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The three handler calling conventions (§4.3).
//!
//! The registry stores a bare [`Handler`] and never discriminates between
//! flavors itself — it is the job executor (`pw-engine`) that matches on
//! the variant and adapts. `simple_job`/`submitter_job`/`mutable_job` are
//! the Rust analogue of the source's decorator-based adapters: they lift a
//! narrow closure into the enum variant the executor expects.

use pw_config::{Parameters, PipelineNode, SubmitFn};
use pw_core::{JobLogger, Scope, Status};
use std::sync::Arc;

/// `(parameters, logger) -> status`.
pub type SimpleFn = dyn Fn(&Parameters, &JobLogger) -> Status + Send + Sync;

/// `(parameters, submit_fn, scope, pipeline_node, logger) -> status`.
/// May call `submit_fn` zero or more times before returning.
pub type SubmitterFn =
    dyn Fn(&Parameters, &SubmitFn, &Scope, &PipelineNode, &JobLogger) -> Status + Send + Sync;

/// `(parameters, scope, pipeline_node, logger) -> (status, new_scope, pipeline_override)`.
///
/// `pipeline_override` is `None` when the handler only wants to change the
/// scope; `Some(node)` replaces the pipeline node the engine carries
/// forward for the remainder of this step (the mechanism behind the
/// "mutable rewrite" scenario in §8, where a handler hands back a pipeline
/// node with its restart policy or cursor already altered).
pub type MutableFn = dyn Fn(&Parameters, &Scope, &PipelineNode, &JobLogger) -> (Status, Scope, Option<PipelineNode>)
    + Send
    + Sync;

/// A registered handler, in one of the three calling-convention flavors.
///
/// The registry itself is blind to which flavor a name maps to — the
/// executor matches on this enum and invokes accordingly.
#[derive(Clone)]
pub enum Handler {
    Simple(Arc<SimpleFn>),
    Submitter(Arc<SubmitterFn>),
    Mutable(Arc<MutableFn>),
}

impl Handler {
    pub fn flavor(&self) -> &'static str {
        match self {
            Handler::Simple(_) => "simple",
            Handler::Submitter(_) => "submitter",
            Handler::Mutable(_) => "mutable",
        }
    }
}

pub fn simple_job<F>(f: F) -> Handler
where
    F: Fn(&Parameters, &JobLogger) -> Status + Send + Sync + 'static,
{
    Handler::Simple(Arc::new(f))
}

pub fn submitter_job<F>(f: F) -> Handler
where
    F: Fn(&Parameters, &SubmitFn, &Scope, &PipelineNode, &JobLogger) -> Status + Send + Sync + 'static,
{
    Handler::Submitter(Arc::new(f))
}

pub fn mutable_job<F>(f: F) -> Handler
where
    F: Fn(&Parameters, &Scope, &PipelineNode, &JobLogger) -> (Status, Scope, Option<PipelineNode>)
        + Send
        + Sync
        + 'static,
{
    Handler::Mutable(Arc::new(f))
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
