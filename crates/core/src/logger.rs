// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `logger` argument threaded through every handler calling convention
//! (`simple`, `submitter`, `mutable`).
//!
//! A thin wrapper around a [`tracing::Span`] rather than a bespoke trait:
//! handlers are free functions living in their own crate (`pw-handlers` or
//! a downstream consumer), so the logger they receive needs to be `Clone`,
//! `Send + Sync`, and cheap to carry across the executor/registry boundary
//! without pulling either crate into a dependency cycle. Lives in
//! `pw-core` for the same reason `Status` and `Primitive` do: every crate
//! that defines or calls a handler needs it.

use std::fmt;

/// Structured logging handle passed to job handlers.
///
/// Each job execution gets one, scoped with the job and pipeline ids so
/// every line a handler emits is attributable without the handler having
/// to thread those ids through itself.
#[derive(Clone, Debug)]
pub struct JobLogger {
    span: tracing::Span,
}

impl JobLogger {
    pub fn new(span: tracing::Span) -> Self {
        Self { span }
    }

    /// A logger with no attached span, for contexts where there is no
    /// enclosing job (standalone resolver calls, unit tests).
    pub fn disconnected() -> Self {
        Self {
            span: tracing::Span::none(),
        }
    }

    pub fn for_job(pipeline_id: &str, job_id: &str, function: &str) -> Self {
        Self::new(tracing::info_span!("job", pipeline_id, job_id, function))
    }

    /// A logger scoped to a pipeline step rather than a single job, for
    /// contexts that run before a stage's job/pipeline identity is known
    /// (the worker's dispatch of one dequeued configuration).
    pub fn for_pipeline(pipeline_id: &str) -> Self {
        Self::new(tracing::info_span!("pipeline", pipeline_id))
    }

    pub fn info(&self, message: impl fmt::Display) {
        let _entered = self.span.enter();
        tracing::info!("{message}");
    }

    pub fn warn(&self, message: impl fmt::Display) {
        let _entered = self.span.enter();
        tracing::warn!("{message}");
    }

    pub fn error(&self, message: impl fmt::Display) {
        let _entered = self.span.enter();
        tracing::error!("{message}");
    }
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
