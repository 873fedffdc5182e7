//! Field-mapping boundary between typed values and the store.

use crate::error::{AccessorError, AccessorResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use treebase_store::FieldMap;

/// Serializes a value into a field mapping.
///
/// The value must serialize to an object (a mapping from field name to
/// dynamic value); scalars and sequences are rejected, since the store
/// addresses fields by name at each location.
///
/// # Errors
///
/// Returns [`AccessorError::Encode`] if serialization fails or the
/// value is not an object. Encoding is never partially applied.
pub fn to_field_map<T: Serialize>(value: &T) -> AccessorResult<FieldMap> {
    match serde_json::to_value(value) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(other) => Err(AccessorError::Encode {
            message: format!("expected an object with named fields, got {}", kind(&other)),
        }),
        Err(err) => Err(AccessorError::Encode {
            message: err.to_string(),
        }),
    }
}

/// Deserializes a field mapping back into a typed value.
pub fn from_field_map<T: DeserializeOwned>(fields: FieldMap) -> AccessorResult<T> {
    serde_json::from_value(Value::Object(fields)).map_err(|err| AccessorError::Decode {
        message: err.to_string(),
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
