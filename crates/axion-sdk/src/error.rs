//! Error types for the Axion binding ABI
//!
//! All variants are terminal: they signal a missing capability or a failed
//! native call, never a transient condition worth retrying.

/// Result type for binding calls
pub type FfiResult<T> = Result<T, FfiError>;

/// Binding-layer error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum FfiError {
    /// Attribute lookup failed. The runtime-only stub raises this for every
    /// name since no introspector is present.
    #[error("attribute not found: {type_key}.{name}")]
    AttributeNotFound {
        /// Type key of the object being inspected
        type_key: String,
        /// Requested attribute name
        name: String,
    },

    /// Capability compiled out of this build
    #[error("{0} is not supported in runtime-only mode")]
    Unsupported(&'static str),

    /// A native handler returned a value of an unexpected shape
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Expected value shape
        expected: String,
        /// Actual value shape
        got: String,
    },

    /// Name already present in the registry and override was not requested
    #[error("native function already registered: {0}")]
    DuplicateFunction(String),

    /// Native call failed
    #[error("native call failed: {0}")]
    Call(String),
}

impl From<String> for FfiError {
    fn from(s: String) -> Self {
        FfiError::Call(s)
    }
}

impl From<&str> for FfiError {
    fn from(s: &str) -> Self {
        FfiError::Call(s.to_string())
    }
}
