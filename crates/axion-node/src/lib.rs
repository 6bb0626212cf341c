//! Bindings for the Axion runtime's "node" namespace
//!
//! Object reflection and serialization live in the native runtime; this
//! crate only routes calls there. [`NodeApi`] holds one handler slot per
//! operation, bound at initialization from the native function registry.
//! In runtime-only builds nothing is registered under "node", so every
//! slot keeps its stub: representation formatting returns a placeholder
//! built from the type key and handle, attribute listing reports zero
//! attributes, and the remaining operations fail with capability-absence
//! errors.
//!
//! # Example
//!
//! ```ignore
//! use axion_node::NodeApi;
//! use axion_sdk::{ObjectHandle, ObjectRef};
//!
//! let api = NodeApi::global();
//! let obj = ObjectRef::new("ir.Var", ObjectHandle::new(0x7f10));
//! println!("{}", api.repr(&obj)); // "ir.Var(0x7f10)" unless a formatter is bound
//! ```

#![warn(missing_docs)]

mod api;
mod stubs;

pub use api::{
    AttrLister, NodeApi, NAMESPACE, OP_AS_REPR, OP_GET_ATTR, OP_LIST_ATTR_NAMES, OP_LOAD_JSON,
    OP_SAVE_JSON,
};
pub use axion_sdk::{FfiError, FfiResult, ObjectHandle, ObjectRef, Value};
