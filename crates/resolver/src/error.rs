// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResolveError {
    #[error("non-numeric operand {0:?} at arithmetic position")]
    NonNumericOperand(String),
    #[error("division by zero in expression {0:?}")]
    DivisionByZero(String),
}
