// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The shape of the submission callback (§4.7, §4.8): the one thing every
//! handler flavor, the pipeline engine, and the entry point all hold a
//! reference to. Defined here (rather than in `pw-submitter`) so that
//! `pw-registry` can describe the `submitter` handler calling convention
//! without depending on the crate that implements the worker pool.

use crate::node::Config;
use std::sync::Arc;

/// Enqueues a configuration onto the unified work queue.
///
/// Cloning is cheap (an `Arc` around the closure); every worker, handler,
/// and the pipeline engine itself carries its own clone.
pub type SubmitFn = Arc<dyn Fn(Config) + Send + Sync>;
