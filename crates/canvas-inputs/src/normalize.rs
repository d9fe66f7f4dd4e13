//! Input normalization.
//!
//! The unwrap rule is applied depth-first to every nested value:
//!
//! - scalars are returned unchanged;
//! - arrays are normalized element by element;
//! - an object holding both `value` and `sourceType` (plus anything else)
//!   collapses to the normalized `value`;
//! - otherwise an object whose `value` is a string collapses to that string;
//! - any other object keeps its keys and has each value normalized.

use crate::error::InputsError;
use serde_json::{Map, Value};

/// Normalized property bag of one component, in payload key order.
pub type Inputs = Map<String, Value>;

const VALUE_KEY: &str = "value";
const SOURCE_TYPE_KEY: &str = "sourceType";

/// Recursively unwraps value envelopes.
pub fn normalize_input_value(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_input_value).collect()),
        Value::Object(map) => normalize_object(map),
        scalar => scalar,
    }
}

fn normalize_object(mut map: Map<String, Value>) -> Value {
    if map.len() > 1 && map.contains_key(SOURCE_TYPE_KEY) {
        if let Some(inner) = map.remove(VALUE_KEY) {
            return normalize_input_value(inner);
        }
    }
    if matches!(map.get(VALUE_KEY), Some(Value::String(_))) {
        if let Some(text) = map.remove(VALUE_KEY) {
            return text;
        }
    }
    Value::Object(
        map.into_iter()
            .map(|(key, value)| (key, normalize_input_value(value)))
            .collect(),
    )
}

/// Parses and normalizes a raw payload, surfacing parse errors.
///
/// The result is whatever the payload normalizes to, which is not
/// necessarily an object.
pub fn try_parse_inputs(raw: &str) -> Result<Value, InputsError> {
    let parsed: Value = serde_json::from_str(raw)?;
    Ok(normalize_input_value(parsed))
}

/// Parses and normalizes a raw payload into a property bag.
///
/// Malformed payloads are logged and yield an empty bag. A payload that
/// normalizes to something other than an object also yields an empty bag;
/// an object spread would instead turn array or string payloads into
/// index-keyed properties, which is deliberately not reproduced here.
pub fn parse_inputs(raw: &str) -> Inputs {
    match try_parse_inputs(raw) {
        Ok(Value::Object(props)) => props,
        Ok(other) => {
            tracing::debug!(inputs = raw, kind = kind_of(&other), "inputs are not an object, ignoring");
            Inputs::new()
        }
        Err(err) => {
            tracing::error!(inputs = raw, error = %err, "failed to parse inputs");
            Inputs::new()
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
