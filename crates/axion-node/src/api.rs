//! Node-namespace dispatch table
//!
//! `NodeApi` is built once: stubs first, then every operation name found
//! under "node" in the registry rebinds its slot. After that, dispatch is a
//! direct call through the slot with no registry lookup.

use std::fmt;

use once_cell::sync::Lazy;

use axion_sdk::{registry, FfiError, FfiResult, FunctionRegistry, NativeFn, ObjectRef, Value};

use crate::stubs;

/// Registry namespace the native runtime exports reflection under
pub const NAMESPACE: &str = "node";

/// Operation name for representation formatting
pub const OP_AS_REPR: &str = "AsRepr";
/// Operation name for attribute-name listing
pub const OP_LIST_ATTR_NAMES: &str = "NodeListAttrNames";
/// Operation name for attribute retrieval
pub const OP_GET_ATTR: &str = "NodeGetAttr";
/// Operation name for serialize-to-JSON
pub const OP_SAVE_JSON: &str = "SaveJSON";
/// Operation name for deserialize-from-JSON
pub const OP_LOAD_JSON: &str = "LoadJSON";

/// Attribute-name lister returned by [`NodeApi::attr_names`].
///
/// Index `-1` yields the attribute count, `0..count` yield the names.
/// The runtime-only stub yields `0` for every index, i.e. no attributes.
#[derive(Clone)]
pub struct AttrLister {
    func: NativeFn,
}

impl AttrLister {
    pub(crate) fn new(func: NativeFn) -> Self {
        AttrLister { func }
    }

    /// Raw indexed call into the native lister
    pub fn call(&self, index: i64) -> FfiResult<Value> {
        (self.func)(&[Value::Int(index)])
    }

    /// Number of attributes
    pub fn len(&self) -> FfiResult<usize> {
        match self.call(-1)? {
            Value::Int(n) => Ok(n.max(0) as usize),
            other => Err(FfiError::TypeMismatch {
                expected: "int".to_string(),
                got: other.type_name().to_string(),
            }),
        }
    }

    /// Check if the object reports no attributes
    pub fn is_empty(&self) -> FfiResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Materialize all attribute names
    pub fn collect(&self) -> FfiResult<Vec<String>> {
        let count = self.len()?;
        let mut names = Vec::with_capacity(count);
        for index in 0..count {
            match self.call(index as i64)? {
                Value::Str(name) => names.push(name),
                other => {
                    return Err(FfiError::TypeMismatch {
                        expected: "string".to_string(),
                        got: other.type_name().to_string(),
                    })
                }
            }
        }
        Ok(names)
    }
}

impl fmt::Debug for AttrLister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttrLister").finish_non_exhaustive()
    }
}

/// Dispatch table for the node namespace.
///
/// Immutable after construction and cheap to clone (slots are shared).
#[derive(Clone)]
pub struct NodeApi {
    as_repr: NativeFn,
    list_attr_names: NativeFn,
    get_attr: NativeFn,
    save_json: NativeFn,
    load_json: NativeFn,
}

impl fmt::Debug for NodeApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeApi").finish_non_exhaustive()
    }
}

impl NodeApi {
    /// Table with every slot on its runtime-only stub
    pub fn runtime_only() -> Self {
        NodeApi {
            as_repr: stubs::as_repr(),
            list_attr_names: stubs::list_attr_names(),
            get_attr: stubs::get_attr(),
            save_json: stubs::save_json(),
            load_json: stubs::load_json(),
        }
    }

    /// Bind from a registry: every `node.<op>` name found replaces the stub,
    /// unbound slots keep stub behavior.
    ///
    /// Idempotent for identical registry contents.
    pub fn from_registry(registry: &FunctionRegistry) -> Self {
        let resolve = |op: &str, stub: NativeFn| -> NativeFn {
            registry
                .get(&format!("{}.{}", NAMESPACE, op))
                .unwrap_or(stub)
        };
        NodeApi {
            as_repr: resolve(OP_AS_REPR, stubs::as_repr()),
            list_attr_names: resolve(OP_LIST_ATTR_NAMES, stubs::list_attr_names()),
            get_attr: resolve(OP_GET_ATTR, stubs::get_attr()),
            save_json: resolve(OP_SAVE_JSON, stubs::save_json()),
            load_json: resolve(OP_LOAD_JSON, stubs::load_json()),
        }
    }

    /// Process-wide table, bound once from the global registry at first use.
    ///
    /// Native runtimes must register their "node" implementations before the
    /// first call; later registry changes are not picked up here.
    pub fn global() -> &'static NodeApi {
        static GLOBAL: Lazy<NodeApi> =
            Lazy::new(|| NodeApi::from_registry(&registry::global().read()));
        &GLOBAL
    }

    /// Debug representation of an object.
    ///
    /// Infallible: a bound formatter that errors or returns a non-string
    /// falls back to the placeholder format, so the result always starts
    /// with the type key.
    pub fn repr(&self, obj: &ObjectRef) -> String {
        match (self.as_repr)(&[Value::Object(obj.clone())]) {
            Ok(Value::Str(s)) => s,
            _ => stubs::default_repr(obj),
        }
    }

    /// Attribute-name lister for an object
    pub fn attr_names(&self, obj: &ObjectRef) -> FfiResult<AttrLister> {
        match (self.list_attr_names)(&[Value::Object(obj.clone())])? {
            Value::Func(func) => Ok(AttrLister::new(func)),
            other => Err(FfiError::TypeMismatch {
                expected: "function".to_string(),
                got: other.type_name().to_string(),
            }),
        }
    }

    /// Retrieve an attribute by name
    pub fn get_attr(&self, obj: &ObjectRef, name: &str) -> FfiResult<Value> {
        (self.get_attr)(&[Value::Object(obj.clone()), Value::Str(name.to_string())])
    }

    /// Serialize an object graph to JSON
    pub fn save_json(&self, obj: &ObjectRef) -> FfiResult<String> {
        match (self.save_json)(&[Value::Object(obj.clone())])? {
            Value::Str(json) => Ok(json),
            other => Err(FfiError::TypeMismatch {
                expected: "string".to_string(),
                got: other.type_name().to_string(),
            }),
        }
    }

    /// Deserialize an object graph from JSON
    pub fn load_json(&self, json: &str) -> FfiResult<Value> {
        (self.load_json)(&[Value::Str(json.to_string())])
    }
}

impl Default for NodeApi {
    fn default() -> Self {
        Self::runtime_only()
    }
}
