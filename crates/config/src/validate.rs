// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Turns a deserialized [`raw`](crate::raw) document into a validated,
//! execution-ready [`node`](crate::node) tree.
//!
//! Handler name resolution is the one place this crate needs to reach
//! outside itself: the registry (`pw-registry`) owns the actual mapping
//! from dotted name to handler, so validation is parameterized over a
//! [`FunctionResolver`] rather than depending on the registry crate
//! directly (which in turn depends on this crate for the node types it
//! operates on).

use crate::error::ConfigError;
use crate::node::{
    Config, InitialConfig, JobId, JobNode, LoggingConfig, LoggingKind, ParamValue, PipelineId,
    PipelineNode, Parameters, Stage, SubmitterConfig, SubmitterKind,
};
use crate::raw::{
    RawConfig, RawInitialConfig, RawJob, RawLoggingConfig, RawLoggingType, RawParamValue,
    RawParameters, RawPipeline, RawStage, RawSubmitterConfig, RawSubmitterType,
};
use pw_core::{IdGen, Status, UuidIdGen};
use uuid::Uuid;

/// Answers "does this dotted function name resolve to a registered
/// handler?" without requiring validation to depend on the registry crate.
pub trait FunctionResolver {
    fn resolves(&self, dotted_name: &str) -> bool;
}

impl<F: Fn(&str) -> bool> FunctionResolver for F {
    fn resolves(&self, dotted_name: &str) -> bool {
        self(dotted_name)
    }
}

fn validate_id(raw: Option<String>) -> Result<String, ConfigError> {
    match raw {
        None => Ok(UuidIdGen.next()),
        Some(s) => {
            Uuid::parse_str(&s).map_err(|e| ConfigError::InvalidId(s.clone(), e.to_string()))?;
            Ok(s)
        }
    }
}

fn validate_parameters(
    raw: RawParameters,
    resolver: &impl FunctionResolver,
) -> Result<Parameters, ConfigError> {
    let Some(map) = raw else {
        return Ok(None);
    };
    let mut out = std::collections::HashMap::with_capacity(map.len());
    for (k, v) in map {
        let value = match v {
            RawParamValue::Primitive(p) => ParamValue::Primitive(p),
            RawParamValue::List(l) => ParamValue::List(l),
            RawParamValue::Stage(s) => ParamValue::Stage(Box::new(validate_stage(*s, resolver)?)),
        };
        out.insert(k, value);
    }
    Ok(Some(out))
}

fn validate_job(raw: RawJob, mutable: bool, resolver: &impl FunctionResolver) -> Result<JobNode, ConfigError> {
    if !resolver.resolves(&raw.function) {
        return Err(ConfigError::UnknownFunction(raw.function));
    }
    Ok(JobNode {
        id: JobId::new(validate_id(raw.id)?),
        name: raw.name,
        function: raw.function,
        parameters: validate_parameters(raw.parameters, resolver)?,
        mutable,
    })
}

/// Validate a pipeline node, recursively validating every nested stage.
pub fn validate_pipeline(
    raw: RawPipeline,
    resolver: &impl FunctionResolver,
) -> Result<PipelineNode, ConfigError> {
    if raw.stages.is_empty() {
        return Err(ConfigError::EmptyPipeline);
    }
    if raw.max_allowed_restarts < -1 {
        return Err(ConfigError::InvalidMaxRestarts(raw.max_allowed_restarts));
    }
    if raw.max_allowed_restarts != -1 && raw.curr_restarts > raw.max_allowed_restarts {
        return Err(ConfigError::RestartsExceedMax {
            curr_restarts: raw.curr_restarts,
            max_allowed_restarts: raw.max_allowed_restarts,
        });
    }
    let stage_count = raw.stages.len();
    if raw.curr_stage < 0 || raw.curr_stage as usize > stage_count {
        return Err(ConfigError::StageIndexOutOfRange {
            curr_stage: raw.curr_stage,
            stage_count,
        });
    }

    let mut stages = Vec::with_capacity(raw.stages.len());
    for stage in raw.stages {
        stages.push(validate_stage(stage, resolver)?);
    }

    Ok(PipelineNode::from_parts(
        PipelineId::new(validate_id(raw.id)?),
        raw.name,
        stages,
        raw.curr_stage,
        raw.status.unwrap_or(Status::Ready),
        raw.max_allowed_restarts,
        raw.curr_restarts,
    ))
}

fn validate_stage(raw: RawStage, resolver: &impl FunctionResolver) -> Result<Stage, ConfigError> {
    Ok(match raw {
        RawStage::Job(j) => Stage::Job(validate_job(j, false, resolver)?),
        RawStage::MutableJob(j) => Stage::Job(validate_job(j, true, resolver)?),
        RawStage::Pipeline(p) => Stage::Pipeline(validate_pipeline(p, resolver)?),
    })
}

pub fn validate_config(raw: RawConfig, resolver: &impl FunctionResolver) -> Result<Config, ConfigError> {
    Ok(Config {
        scope: raw.variables,
        root: validate_pipeline(raw.config, resolver)?,
    })
}

fn validate_submitter_config(raw: RawSubmitterConfig) -> SubmitterConfig {
    SubmitterConfig {
        kind: match raw.submitter_type {
            RawSubmitterType::Local => SubmitterKind::Local,
        },
        name: raw.name,
        num_concurrent_jobs: raw.num_concurrent_jobs.max(1),
    }
}

fn validate_logging_config(raw: RawLoggingConfig) -> LoggingConfig {
    LoggingConfig {
        kind: match raw.logging_type {
            RawLoggingType::Off => LoggingKind::Off,
            RawLoggingType::Console => LoggingKind::Console,
            RawLoggingType::File => LoggingKind::File,
            RawLoggingType::Remote => LoggingKind::Remote,
        },
        level: raw.level,
        directory: raw.directory,
    }
}

/// Validate an entire top-level document. This is the one call site the
/// entry point (C8) makes before anything is ever enqueued.
pub fn validate_initial_config(
    raw: RawInitialConfig,
    resolver: &impl FunctionResolver,
) -> Result<InitialConfig, ConfigError> {
    Ok(InitialConfig {
        config: validate_config(raw.analysis_config, resolver)?,
        submitter_config: validate_submitter_config(raw.submitter_config),
        logging_config: validate_logging_config(raw.logging_config),
    })
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
