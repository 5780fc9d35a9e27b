// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The registry itself: a process-wide map from dotted name to [`Handler`],
//! populated at construction rather than discovered dynamically.

use crate::error::RegistryError;
use crate::handler::Handler;
use parking_lot::RwLock;
use pw_config::FunctionResolver;
use std::collections::HashMap;
use std::sync::Arc;

/// Resolves dotted function names to handlers.
///
/// Cloning is cheap and shares the same underlying map (`Arc<RwLock<_>>`):
/// the registry is built once at startup and then handed to every worker.
#[derive(Clone, Default)]
pub struct Registry {
    handlers: Arc<RwLock<HashMap<String, Handler>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under a dotted name, overwriting any previous
    /// registration under the same name. Returns `self` for chaining.
    pub fn register(&self, name: impl Into<String>, handler: Handler) -> &Self {
        self.handlers.write().insert(name.into(), handler);
        self
    }

    pub fn resolve(&self, name: &str) -> Result<Handler, RegistryError> {
        self.handlers
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    pub fn resolves(&self, name: &str) -> bool {
        self.handlers.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }
}

impl FunctionResolver for Registry {
    fn resolves(&self, dotted_name: &str) -> bool {
        Registry::resolves(self, dotted_name)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
