//! JSON wire shape of an `Outcome`.
//!
//! An outcome travels as a plain object with both markers and the payload:
//!
//! ```text
//! {"isOk": true,  "isErr": false, "value": <success value>}
//! {"isOk": false, "isErr": true,  "value": <error>}
//! ```
//!
//! Objects missing a marker or the payload are not outcomes, nor are objects
//! whose markers are not booleans or claim the same variant.
use log::debug;
use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::OutcomeError;
use crate::outcome::Outcome;
use crate::result::Result;

/// Key of the success marker.
pub const IS_OK: &str = "isOk";
/// Key of the failure marker.
pub const IS_ERR: &str = "isErr";
/// Key of the payload.
pub const VALUE: &str = "value";

impl<T: Serialize, E: Serialize> Serialize for Outcome<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 3)?;
        state.serialize_field(IS_OK, &self.is_ok())?;
        state.serialize_field(IS_ERR, &self.is_err())?;
        match self {
            Outcome::Ok(value) => state.serialize_field(VALUE, value)?,
            Outcome::Err(error) => state.serialize_field(VALUE, error)?,
        }
        state.end()
    }
}

/// Returns `true` if `value` has the serialized outcome shape.
pub fn is_result_value(value: &Value) -> bool {
    check_shape(value).is_ok()
}

/// Encodes an outcome into its JSON shape.
pub fn to_json<T: Serialize, E: Serialize>(outcome: &Outcome<T, E>) -> Result<Value> {
    Ok(serde_json::to_value(outcome)?)
}

/// Decodes a JSON shape, leaving the payload as raw JSON.
pub fn from_json(value: Value) -> Result<Outcome<Value, Value>> {
    let is_ok = match check_shape(&value) {
        Ok(is_ok) => is_ok,
        Err(reason) => {
            debug!("Rejected outcome shape: {}", reason);
            return Err(OutcomeError::Malformed(reason));
        }
    };
    let payload = match value {
        Value::Object(mut map) => map.remove(VALUE).unwrap_or(Value::Null),
        _ => Value::Null,
    };
    Ok(if is_ok {
        Outcome::Ok(payload)
    } else {
        Outcome::Err(payload)
    })
}

/// Decodes a JSON shape and its payload into concrete types.
pub fn decode<T, E>(value: Value) -> Result<Outcome<T, E>>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    Ok(match from_json(value)? {
        Outcome::Ok(payload) => Outcome::Ok(serde_json::from_value(payload)?),
        Outcome::Err(payload) => Outcome::Err(serde_json::from_value(payload)?),
    })
}

/// Validates the markers, returning the `isOk` flag.
fn check_shape(value: &Value) -> std::result::Result<bool, String> {
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Err("null is not an outcome".to_string()),
        Value::Array(_) => return Err("array is not an outcome".to_string()),
        other => return Err(format!("{} is not an object", other)),
    };
    let marker = |key: &str| match map.get(key) {
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(other) => Err(format!("marker `{}` is not a boolean: {}", key, other)),
        None => Err(format!("missing marker `{}`", key)),
    };
    let is_ok = marker(IS_OK)?;
    let is_err = marker(IS_ERR)?;
    if is_ok == is_err {
        return Err(format!("inconsistent markers: {}={}, {}={}", IS_OK, is_ok, IS_ERR, is_err));
    }
    if !map.contains_key(VALUE) {
        return Err(format!("missing `{}`", VALUE));
    }
    Ok(is_ok)
}
