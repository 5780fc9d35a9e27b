// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Small parameter-extraction helpers shared by the demonstration handlers.
//!
//! The reference system validates each handler's parameters against a
//! `pydantic` model before running; these helpers are the Rust analogue
//! for a registry of free functions rather than one model class per
//! handler — pull a typed value out of the resolved [`Parameters`] map or
//! report which key/shape was wrong.

use pw_config::{ParamValue, Parameters, Stage};
use pw_core::Primitive;

#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    #[error("missing required parameter {0:?}")]
    Missing(String),
    #[error("parameter {0:?} has the wrong shape")]
    WrongShape(String),
}

fn get<'a>(parameters: &'a Parameters, key: &str) -> Result<&'a ParamValue, ParamError> {
    parameters
        .as_ref()
        .and_then(|map| map.get(key))
        .ok_or_else(|| ParamError::Missing(key.to_string()))
}

pub fn primitive<'a>(parameters: &'a Parameters, key: &str) -> Result<&'a Primitive, ParamError> {
    match get(parameters, key)? {
        ParamValue::Primitive(p) => Ok(p),
        _ => Err(ParamError::WrongShape(key.to_string())),
    }
}

pub fn string(parameters: &Parameters, key: &str) -> Result<String, ParamError> {
    match primitive(parameters, key)? {
        Primitive::String(s) => Ok(s.clone()),
        other => Ok(other.to_display_string()),
    }
}

pub fn int(parameters: &Parameters, key: &str) -> Result<i64, ParamError> {
    match primitive(parameters, key)? {
        Primitive::Int(i) => Ok(*i),
        _ => Err(ParamError::WrongShape(key.to_string())),
    }
}

pub fn pipeline_template<'a>(
    parameters: &'a Parameters,
    key: &str,
) -> Result<&'a pw_config::PipelineNode, ParamError> {
    match get(parameters, key)? {
        ParamValue::Stage(stage) => match stage.as_ref() {
            Stage::Pipeline(p) => Ok(p),
            Stage::Job(_) => Err(ParamError::WrongShape(key.to_string())),
        },
        _ => Err(ParamError::WrongShape(key.to_string())),
    }
}

pub fn list<'a>(parameters: &'a Parameters, key: &str) -> Result<&'a [Primitive], ParamError> {
    match get(parameters, key)? {
        ParamValue::List(items) => Ok(items),
        _ => Err(ParamError::WrongShape(key.to_string())),
    }
}

/// Looks up an optional parameter, returning `None` rather than an error
/// when the key is simply absent.
pub fn optional<'a>(parameters: &'a Parameters, key: &str) -> Option<&'a ParamValue> {
    parameters.as_ref().and_then(|map| map.get(key))
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
