//! Native function registry
//!
//! Name-keyed table of native handlers under dotted symbolic names
//! (e.g. "node.SaveJSON", "node.AsRepr"). The native runtime registers its
//! implementations here at startup; binding surfaces resolve names once at
//! initialization and fall back to stubs for anything unregistered.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::error::{FfiError, FfiResult};
use crate::value::Value;

/// A native function handler (symbolic name-based dispatch)
pub type NativeFn = Arc<dyn Fn(&[Value]) -> FfiResult<Value> + Send + Sync>;

/// Registry of native functions indexed by symbolic name.
///
/// Duplicate registration is an error unless override is requested, so a
/// runtime cannot silently shadow another's exports.
pub struct FunctionRegistry {
    handlers: HashMap<String, NativeFn>,
}

impl FunctionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a native function by name.
    ///
    /// Returns `DuplicateFunction` if the name is already taken.
    pub fn register(
        &mut self,
        name: &str,
        handler: impl Fn(&[Value]) -> FfiResult<Value> + Send + Sync + 'static,
    ) -> FfiResult<()> {
        self.register_override(name, handler, false)
    }

    /// Register a native function, replacing any existing handler when
    /// `allow_override` is set.
    pub fn register_override(
        &mut self,
        name: &str,
        handler: impl Fn(&[Value]) -> FfiResult<Value> + Send + Sync + 'static,
        allow_override: bool,
    ) -> FfiResult<()> {
        if !allow_override && self.handlers.contains_key(name) {
            return Err(FfiError::DuplicateFunction(name.to_string()));
        }
        self.handlers.insert(name.to_string(), Arc::new(handler));
        Ok(())
    }

    /// Get a handler by name (used at bind time)
    pub fn get(&self, name: &str) -> Option<NativeFn> {
        self.handlers.get(name).cloned()
    }

    /// Check if a handler is registered
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Remove a handler, returning it if present
    pub fn remove(&mut self, name: &str) -> Option<NativeFn> {
        self.handlers.remove(name)
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Bare operation names registered under `<namespace>.`, sorted.
    ///
    /// `namespace_names("node")` on a registry holding "node.SaveJSON" and
    /// "ir.Lower" yields `["SaveJSON"]`.
    pub fn namespace_names(&self, namespace: &str) -> Vec<String> {
        let prefix = format!("{}.", namespace);
        let mut names: Vec<String> = self
            .handlers
            .keys()
            .filter_map(|name| name.strip_prefix(&prefix))
            .map(|bare| bare.to_string())
            .collect();
        names.sort();
        names
    }

    /// Get the number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("count", &self.handlers.len())
            .finish()
    }
}

/// Process-wide registry.
///
/// Native runtimes register their implementations here before any binding
/// surface is initialized; binding takes a read lock only.
pub fn global() -> &'static RwLock<FunctionRegistry> {
    static GLOBAL: Lazy<RwLock<FunctionRegistry>> =
        Lazy::new(|| RwLock::new(FunctionRegistry::new()));
    &GLOBAL
}
