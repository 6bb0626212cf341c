//! Runtime-only stubs
//!
//! Defaults for every node-namespace slot when the native runtime does not
//! register an implementation. Reflection and serialization stubs fail with
//! sentinel errors; the repr stub formats a placeholder from the type key
//! and raw handle.

use std::sync::Arc;

use axion_sdk::{FfiError, FfiResult, NativeFn, ObjectRef, Value};

/// Placeholder representation: type key followed by the hex handle
pub(crate) fn default_repr(obj: &ObjectRef) -> String {
    format!("{}({})", obj.type_key(), obj.handle())
}

fn expect_object(args: &[Value]) -> FfiResult<&ObjectRef> {
    match args.first() {
        Some(Value::Object(obj)) => Ok(obj),
        Some(other) => Err(FfiError::TypeMismatch {
            expected: "object".to_string(),
            got: other.type_name().to_string(),
        }),
        None => Err(FfiError::Call("missing object argument".to_string())),
    }
}

pub(crate) fn as_repr() -> NativeFn {
    Arc::new(|args| {
        let obj = expect_object(args)?;
        Ok(Value::Str(default_repr(obj)))
    })
}

pub(crate) fn list_attr_names() -> NativeFn {
    Arc::new(|args| {
        expect_object(args)?;
        // "no attributes": every index, including the -1 count probe, yields 0
        let lister: NativeFn = Arc::new(|_args| Ok(Value::Int(0)));
        Ok(Value::Func(lister))
    })
}

pub(crate) fn get_attr() -> NativeFn {
    Arc::new(|args| {
        let obj = expect_object(args)?;
        let name = args
            .get(1)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        Err(FfiError::AttributeNotFound {
            type_key: obj.type_key().to_string(),
            name,
        })
    })
}

pub(crate) fn save_json() -> NativeFn {
    Arc::new(|_args| Err(FfiError::Unsupported("object serialization")))
}

pub(crate) fn load_json() -> NativeFn {
    Arc::new(|_args| Err(FfiError::Unsupported("object serialization")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axion_sdk::ObjectHandle;

    fn obj() -> Value {
        Value::Object(ObjectRef::new("ir.Var", ObjectHandle::new(0xbeef)))
    }

    #[test]
    fn test_as_repr_stub_formats_type_and_handle() {
        let result = as_repr()(&[obj()]).unwrap();
        assert_eq!(result.as_str(), Some("ir.Var(0xbeef)"));
    }

    #[test]
    fn test_as_repr_stub_rejects_non_object() {
        let result = as_repr()(&[Value::Int(1)]);
        assert!(matches!(result, Err(FfiError::TypeMismatch { .. })));
    }

    #[test]
    fn test_get_attr_stub_always_not_found() {
        for name in ["dtype", "shape", "", "anything"] {
            let result = get_attr()(&[obj(), Value::Str(name.to_string())]);
            match result {
                Err(FfiError::AttributeNotFound { type_key, name: n }) => {
                    assert_eq!(type_key, "ir.Var");
                    assert_eq!(n, name);
                }
                other => panic!("expected AttributeNotFound, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_lister_stub_yields_zero_for_any_index() {
        let lister = list_attr_names()(&[obj()]).unwrap();
        let lister = lister.as_func().unwrap();
        for index in [-1i64, 0, 1, 100] {
            assert_eq!(lister(&[Value::Int(index)]).unwrap().as_int(), Some(0));
        }
    }

    #[test]
    fn test_serialization_stubs_unsupported() {
        assert!(matches!(
            save_json()(&[obj()]),
            Err(FfiError::Unsupported("object serialization"))
        ));
        assert!(matches!(
            load_json()(&[Value::Str("{}".to_string())]),
            Err(FfiError::Unsupported("object serialization"))
        ));
    }
}
