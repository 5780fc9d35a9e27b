// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Type re-inference on a resolved string (§4.4).
//!
//! Order matters: integer, then float, then a *containment* check against
//! the literals `"true"`/`"false"` (not an equality check), else the
//! string unchanged. The containment check is the source's behavior,
//! reproduced exactly for compatibility — `"tru"`, `"rue"`, and even `""`
//! all match `"true"` under it. Flagged as a possibly-unintended quirk by
//! the spec this crate implements; narrowing it to exact match would
//! change which configs round-trip the same way the reference system
//! does, so it stays as-is.

use pw_core::Primitive;

pub fn infer_type(s: &str) -> Primitive {
    if let Ok(i) = s.parse::<i64>() {
        return Primitive::Int(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        if f.is_finite() {
            return Primitive::Float(f);
        }
    }
    let lower = s.to_lowercase();
    if "true".contains(&lower) {
        return Primitive::Bool(true);
    }
    if "false".contains(&lower) {
        return Primitive::Bool(false);
    }
    Primitive::String(s.to_string())
}

#[cfg(test)]
#[path = "infer_tests.rs"]
mod tests;
