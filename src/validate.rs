//! Runtime type check at the crate boundary.
//!
//! The converters accept values from loosely typed sources (deserialized
//! JSON, dynamic configuration) and must reject anything that is not a
//! string before the pipeline runs. This is the only failure the public
//! converters can produce.

use crate::recase::RecaseError;
use serde_json::Value;

/// Accept `input` iff it is a JSON string; otherwise fail with
/// [`RecaseError::InvalidInputType`] naming the actual type.
#[inline]
pub fn expect_string(input: &Value) -> Result<&str, RecaseError> {
    match input {
        Value::String(s) => Ok(s),
        other => Err(RecaseError::InvalidInputType {
            found: type_name(other),
        }),
    }
}

/// JSON type name for error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
