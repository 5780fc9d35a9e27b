// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Construction-time validation errors for the configuration model.

use thiserror::Error;

/// Errors raised while validating a raw configuration document into a
/// frozen, execution-ready tree.
///
/// These are all pre-execution: a configuration error aborts before any
/// work is ever enqueued.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("handler function not found: {0}")]
    UnknownFunction(String),
    #[error("pipeline has no stages")]
    EmptyPipeline,
    #[error("curr_stage {curr_stage} out of range for {stage_count} stages")]
    StageIndexOutOfRange { curr_stage: i64, stage_count: usize },
    #[error("curr_restarts ({curr_restarts}) exceeds max_allowed_restarts ({max_allowed_restarts})")]
    RestartsExceedMax {
        curr_restarts: i64,
        max_allowed_restarts: i64,
    },
    #[error("max_allowed_restarts must be >= -1, got {0}")]
    InvalidMaxRestarts(i64),
    #[error("invalid uuid for id {0:?}: {1}")]
    InvalidId(String, String),
    #[error("parameter map contains invalid value for key {0:?}")]
    InvalidParameterValue(String),
}
