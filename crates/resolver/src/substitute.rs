// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scans a whole parameter string for `%{...}` tokens, replaces each with
//! its evaluated text, and — if at least one substitution happened —
//! re-infers the type of the *entire* resulting string (§4.4). A string
//! with no tokens is returned unchanged, untouched by type inference.

use crate::error::ResolveError;
use crate::expr::eval_expr;
use crate::infer::infer_type;
use pw_core::{Primitive, Scope};
use regex::Regex;
use std::sync::OnceLock;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // The pattern is a fixed literal; it either always compiles or never does.
    #[allow(clippy::expect_used)]
    PATTERN.get_or_init(|| Regex::new(r"%\{([^}]*)\}").expect("valid token regex"))
}

/// Resolve every `%{...}` token in `input` against `scope`, returning the
/// re-inferred primitive. Returns `input` unchanged (as a string) if it
/// contains no tokens.
pub fn resolve_string(input: &str, scope: &Scope) -> Result<Primitive, ResolveError> {
    let pattern = token_pattern();
    let mut did_substitute = false;
    let mut out = String::with_capacity(input.len());
    let mut last = 0;

    for caps in pattern.captures_iter(input) {
        // Group 0 is the whole match and is always present for a match yielded
        // by `captures_iter`.
        #[allow(clippy::expect_used)]
        let whole = caps.get(0).expect("capture group 0 always matches");
        out.push_str(&input[last..whole.start()]);
        let expr = &caps[1];
        let value = eval_expr(expr, scope)?;
        out.push_str(&value.to_display_string());
        last = whole.end();
        did_substitute = true;
    }
    out.push_str(&input[last..]);

    if did_substitute {
        Ok(infer_type(&out))
    } else {
        Ok(Primitive::String(input.to_string()))
    }
}

#[cfg(test)]
#[path = "substitute_tests.rs"]
mod tests;
