//! Axion SDK - FFI types shared by the runtime and its binding surfaces
//!
//! This crate provides the minimal types needed to talk to the Axion native
//! runtime without depending on the runtime itself: value handles, error
//! types, and the name-keyed native function registry the runtime populates
//! at startup.
//!
//! # Example
//!
//! ```ignore
//! use axion_sdk::{registry, FfiResult, Value};
//!
//! // A native runtime registers its implementations under dotted names:
//! registry::global().write().register("node.SaveJSON", |args| {
//!     // ... serialize the object graph ...
//!     Ok(Value::Str("{}".to_string()))
//! })?;
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod registry;
pub mod value;

pub use error::{FfiError, FfiResult};
pub use registry::{FunctionRegistry, NativeFn};
pub use value::{ObjectHandle, ObjectRef, Value};
