// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deserializable mirror of the external JSON configuration document.
//!
//! These types accept exactly the wire shape described in the spec,
//! populate defaults, and are handed to [`crate::validate`] to produce the
//! frozen, execution-ready tree in [`crate::node`]. They are never executed
//! directly — a raw node carries no guarantee that its `function` resolves,
//! that index fields are in range, or that ids are well-formed.

use pw_core::Primitive;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_job_name() -> String {
    "some job".to_string()
}

fn default_pipeline_name() -> String {
    "pipeline".to_string()
}

fn default_max_allowed_restarts() -> i64 {
    0
}

/// A parameter value: a primitive, an ordered list of primitives, or a
/// nested stage (pipeline or job) given inline as an argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawParamValue {
    List(Vec<Primitive>),
    Stage(Box<RawStage>),
    Primitive(Primitive),
}

pub type RawParameters = Option<HashMap<String, RawParamValue>>;

/// A single stage: either a job (simple/submitter or mutable flavor;
/// the distinction is the `type` tag, not a registry property) or a
/// nested pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawStage {
    Job(RawJob),
    MutableJob(RawJob),
    Pipeline(RawPipeline),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawJob {
    #[serde(default = "default_job_name")]
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    pub function: String,
    #[serde(default)]
    pub parameters: RawParameters,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPipeline {
    #[serde(default = "default_pipeline_name")]
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub curr_stage: i64,
    #[serde(default)]
    pub status: Option<pw_core::Status>,
    #[serde(default = "default_max_allowed_restarts")]
    pub max_allowed_restarts: i64,
    #[serde(default)]
    pub curr_restarts: i64,
    pub stages: Vec<RawStage>,
}

/// A variable scope plus a root pipeline: the unit submitted to the queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawConfig {
    #[serde(default, alias = "scope")]
    pub variables: HashMap<String, Primitive>,
    pub config: RawPipeline,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawSubmitterType {
    Local,
}

fn default_submitter_name() -> String {
    "local submitter".to_string()
}

fn default_num_concurrent_jobs() -> usize {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSubmitterConfig {
    #[serde(rename = "type")]
    pub submitter_type: RawSubmitterType,
    #[serde(default = "default_submitter_name")]
    pub name: String,
    #[serde(default = "default_num_concurrent_jobs")]
    pub num_concurrent_jobs: usize,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RawLoggingType {
    Off,
    #[default]
    Console,
    File,
    Remote,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLoggingConfig {
    #[serde(rename = "type", default)]
    pub logging_type: RawLoggingType,
    #[serde(default)]
    pub level: Option<i32>,
    #[serde(default)]
    pub directory: Option<String>,
}

/// Top-level document: a configuration plus submitter and logging wiring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawInitialConfig {
    pub analysis_config: RawConfig,
    pub submitter_config: RawSubmitterConfig,
    #[serde(default)]
    pub logging_config: RawLoggingConfig,
}

#[cfg(test)]
#[path = "raw_tests.rs"]
mod tests;
