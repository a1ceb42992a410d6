use std::collections::BTreeMap;
use std::iter::FromIterator;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use vtx_core::errors::{ErrorInfo, VtxError};

fn serde_error(code: &str, err: impl ToString) -> VtxError {
    VtxError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into JSON bytes with keys in sorted order.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, VtxError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonical).map_err(|err| serde_error("json-write", err))?;
    Ok(bytes)
}

/// Pretty JSON for human consumption.
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String, VtxError> {
    serde_json::to_string_pretty(value).map_err(|err| serde_error("json-encode", err))
}

/// Restores a value from JSON text.
pub fn from_json_str<T: DeserializeOwned>(data: &str) -> Result<T, VtxError> {
    serde_json::from_str(data).map_err(|err| serde_error("json-decode", err))
}

/// Serializes a value into YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, VtxError> {
    serde_yaml::to_string(value).map_err(|err| serde_error("yaml-encode", err))
}

/// Restores a value from YAML text.
pub fn from_yaml_str<T: DeserializeOwned>(data: &str) -> Result<T, VtxError> {
    serde_yaml::from_str(data).map_err(|err| serde_error("yaml-decode", err))
}
