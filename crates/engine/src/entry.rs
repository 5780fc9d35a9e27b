// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The entry point (C8): wire a validated [`InitialConfig`] to the
//! submitter and drive it to drain.
//!
//! `run_manager` is the one-stage delegation the spec names directly;
//! [`run`]/[`Runner`] are the ambient scaffolding around it — seeding the
//! worker pool with the configured concurrency and building the
//! per-dispatch logger — that a CLI binary or an embedding crate actually
//! calls.

use pw_config::{Config, InitialConfig};
use pw_core::{JobLogger, Status};
use pw_registry::Registry;
use pw_submitter::LocalSubmitter;

/// `run_manager(config, submit_fn, logger)`: delegate straight to
/// [`crate::run_pipeline`] on the configuration's root pipeline and scope.
pub fn run_manager(
    config: &Config,
    registry: &Registry,
    submit: &pw_config::SubmitFn,
    logger: &JobLogger,
) -> Status {
    crate::run_pipeline(&config.root, &config.scope, registry, submit, logger)
}

/// Drives one [`InitialConfig`] to completion: seeds the queue with its
/// root configuration, runs `submitter_config.num_concurrent_jobs` worker
/// threads against the handler `registry`, and blocks until the queue
/// drains (§5's drain rule).
///
/// Callers are expected to have already run
/// [`validate_initial_config`](pw_config::validate_initial_config) — this
/// function does no validation of its own, since by the time a
/// `pw_config::InitialConfig` exists every handler name in the tree is
/// already known to resolve.
pub struct Runner {
    registry: Registry,
}

impl Runner {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn run(&self, initial: InitialConfig) {
        run(self.registry.clone(), initial);
    }
}

pub fn run(registry: Registry, initial: InitialConfig) {
    let submitter = LocalSubmitter::new(initial.submitter_config.num_concurrent_jobs);
    submitter.run(initial.config, move |config, submit| {
        let logger = JobLogger::for_pipeline(config.root.id.as_str());
        let status = run_manager(&config, &registry, &submit, &logger);
        logger.info(format_args!("pipeline step finished with status {status}"));
    });
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
