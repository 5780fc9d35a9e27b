// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pw-config: the configuration model (C2).
//!
//! [`raw`] mirrors the external JSON document; [`validate`] turns it into
//! the frozen, execution-ready tree in [`node`]. Nothing downstream of
//! validation ever sees a `raw` type again.

pub mod error;
pub mod node;
pub mod raw;
pub mod submit;
pub mod validate;

pub use error::ConfigError;
pub use node::{
    Config, InitialConfig, JobId, JobNode, LoggingConfig, LoggingKind, ParamValue, Parameters,
    PipelineId, PipelineNode, Stage, SubmitterConfig, SubmitterKind,
};
pub use submit::SubmitFn;
pub use validate::{validate_config, validate_initial_config, validate_pipeline, FunctionResolver};
