// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifts [`resolve_string`] over a whole parameter map (§4.4 "Resolver
//! contract for parameter maps"): primitives that are strings get
//! substituted, everything else (non-string primitives, lists, nested
//! stages) passes through unchanged.

use crate::error::ResolveError;
use crate::substitute::resolve_string;
use pw_config::{ParamValue, Parameters};
use pw_core::{Primitive, Scope};

/// Resolve every parameter value against `scope`.
///
/// `scope: None` is the "null scope" law (§8): parameters pass through
/// entirely unresolved. `params: None` always maps to `None` regardless
/// of scope.
pub fn resolve_parameters(
    params: Parameters,
    scope: Option<&Scope>,
) -> Result<Parameters, ResolveError> {
    let Some(scope) = scope else {
        return Ok(params);
    };
    let Some(map) = params else {
        return Ok(None);
    };

    let mut resolved = std::collections::HashMap::with_capacity(map.len());
    for (key, value) in map {
        let value = match value {
            ParamValue::Primitive(Primitive::String(s)) => {
                ParamValue::Primitive(resolve_string(&s, scope)?)
            }
            other => other,
        };
        resolved.insert(key, value);
    }
    Ok(Some(resolved))
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
