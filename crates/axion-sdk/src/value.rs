//! Value types crossing the binding boundary
//!
//! `ObjectRef` identifies an object in the native runtime's object graph
//! without owning it: the binding side only ever sees the runtime type key
//! and an opaque handle. `Value` is the uniform argument/result type for
//! native function calls.

use std::fmt;
use std::sync::Arc;

use crate::registry::NativeFn;

/// Opaque handle into the native object graph.
///
/// The numeric value is produced and interpreted by the native runtime;
/// the binding side only stores and displays it. Displays as lowercase
/// hex with a `0x` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle(usize);

impl ObjectHandle {
    /// Wrap a raw handle value received from the native side
    pub fn new(raw: usize) -> Self {
        ObjectHandle(raw)
    }

    /// Get the raw handle value
    pub fn raw(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Reference to a native runtime object: type key plus opaque handle.
///
/// Cloning is cheap (the type key is shared). Equality compares both the
/// type key and the handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    type_key: Arc<str>,
    handle: ObjectHandle,
}

impl ObjectRef {
    /// Create a reference from a runtime type key and handle
    pub fn new(type_key: impl Into<Arc<str>>, handle: ObjectHandle) -> Self {
        ObjectRef {
            type_key: type_key.into(),
            handle,
        }
    }

    /// Runtime type key (e.g. "ir.PrimExpr")
    pub fn type_key(&self) -> &str {
        &self.type_key
    }

    /// Opaque native handle
    pub fn handle(&self) -> ObjectHandle {
        self.handle
    }
}

/// Uniform value passed to and returned from native functions.
///
/// Functions are first-class: native handlers may return further callables
/// (attribute listers do), so `Func` carries a shared handler.
#[derive(Clone, Default)]
pub enum Value {
    /// Absent value
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// Owned string
    Str(String),
    /// Reference into the native object graph
    Object(ObjectRef),
    /// First-class native function
    Func(NativeFn),
}

impl Value {
    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get as boolean if this is a bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as string slice if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the object reference if this is an object
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Get the handler if this is a function
    pub fn as_func(&self) -> Option<&NativeFn> {
        match self {
            Value::Func(f) => Some(f),
            _ => None,
        }
    }

    /// Variant name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Object(_) => "object",
            Value::Func(_) => "function",
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Value::Null"),
            Value::Bool(b) => write!(f, "Value::Bool({})", b),
            Value::Int(i) => write!(f, "Value::Int({})", i),
            Value::Float(x) => write!(f, "Value::Float({})", x),
            Value::Str(s) => write!(f, "Value::Str({:?})", s),
            Value::Object(obj) => {
                write!(f, "Value::Object({}, {})", obj.type_key(), obj.handle())
            }
            Value::Func(_) => write!(f, "Value::Func(..)"),
        }
    }
}

impl From<ObjectRef> for Value {
    fn from(obj: ObjectRef) -> Self {
        Value::Object(obj)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
