// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The arithmetic evaluator inside a `%{...}` token (§4.4).
//!
//! No operator precedence in the conventional sense: operators are tried
//! in the fixed order `-`, `+`, `/`, `*`, and the *first* (leftmost)
//! occurrence of whichever operator is tried first splits the expression
//! in two, which are each evaluated by the same rule recursively. That
//! makes `-` bind loosest and `*` tightest — the reverse of the usual
//! convention — which is why `a*b - bb` evaluates as `(a*b) - bb` and not
//! `a*(b-bb)`. No parentheses; this is a textual split, not a parser.

use crate::error::ResolveError;
use crate::infer::infer_type;
use pw_core::{Primitive, Scope};

const OPERATORS: [char; 4] = ['-', '+', '/', '*'];

/// Resolve a single operand: a literal (int or float), a scope lookup, or
/// — if the name isn't in scope — its own literal text.
fn resolve_operand(token: &str, scope: &Scope) -> Primitive {
    let token = token.trim();
    if let Ok(i) = token.parse::<i64>() {
        return Primitive::Int(i);
    }
    if let Ok(f) = token.parse::<f64>() {
        return Primitive::Float(f);
    }
    match scope.get(token) {
        Some(value) => value.clone(),
        None => Primitive::String(token.to_string()),
    }
}

/// Coerce a resolved operand to a number, running type inference on a
/// string result before giving up (§4.4: "if a string result appears at
/// an arithmetic position, apply type inference").
fn coerce_numeric(value: Primitive) -> Result<f64, ResolveError> {
    match value {
        Primitive::Int(i) => Ok(i as f64),
        Primitive::Float(f) => Ok(f),
        Primitive::String(s) => match infer_type(&s) {
            Primitive::Int(i) => Ok(i as f64),
            Primitive::Float(f) => Ok(f),
            _ => Err(ResolveError::NonNumericOperand(s)),
        },
        Primitive::Bool(b) => Err(ResolveError::NonNumericOperand(b.to_string())),
    }
}

/// Evaluate one `%{...}` expression body against `scope`.
///
/// Returns the resolved [`Primitive`] — a bare operand if no operator is
/// present, otherwise the numeric result of the split-and-combine
/// evaluation described above.
pub fn eval_expr(expr: &str, scope: &Scope) -> Result<Primitive, ResolveError> {
    for op in OPERATORS {
        if let Some(pos) = expr.find(op) {
            let left = &expr[..pos];
            let right = &expr[pos + op.len_utf8()..];
            let lhs = coerce_numeric(eval_expr(left, scope)?)?;
            let rhs = coerce_numeric(eval_expr(right, scope)?)?;
            let result = match op {
                '-' => lhs - rhs,
                '+' => lhs + rhs,
                '/' => {
                    if rhs == 0.0 {
                        return Err(ResolveError::DivisionByZero(expr.to_string()));
                    }
                    lhs / rhs
                }
                '*' => lhs * rhs,
                _ => unreachable!("OPERATORS is exhaustive"),
            };
            return Ok(Primitive::Float(result));
        }
    }
    Ok(resolve_operand(expr, scope))
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;
