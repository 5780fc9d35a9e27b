// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pw-handlers: parameter-extraction helpers and the small set of
//! demonstration handlers named in SPEC_FULL.md §1 as "not a deliverable
//! in itself" — included purely to exercise the registry and executor
//! end to end, the way the reference system's `core.noop`/`core.echo`
//! style built-ins do for its own test suite.

pub mod demo;
pub mod params;

pub use params::ParamError;

use pw_registry::Registry;

/// Register every demonstration handler under its `demo.*` dotted name.
///
/// Callers that want only the handlers they define themselves can ignore
/// this and build a bare [`Registry`] directly; this is a convenience for
/// the CLI binary and for integration tests that want the full set.
pub fn register_demo_handlers(registry: &Registry) {
    demo::register(registry);
}
