use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::{Number, Value};

use crate::types::error::{
    ErrorEntry, ManifestError, E_DUPLICATE_KEY, E_INVALID_TYPE, E_MISSING_FIELD, E_PARSE_ERROR,
};
use crate::types::manifest::Manifest;

/// Top-level key holding the trace list
pub const TRACES_KEY: &str = "traces";

/// Parse JSON, rejecting any object that repeats a key at any nesting depth.
pub fn parse_strict(content: &str, file_path: &str) -> Result<Value, ManifestError> {
    match serde_json::from_str::<StrictValue>(content) {
        Ok(StrictValue(value)) => Ok(value),
        // Every JSON value is accepted by the visitor, so the only data
        // error it can raise is a repeated key.
        Err(err) if err.is_data() => Err(ManifestError::DuplicateKey(
            located_entry(E_DUPLICATE_KEY, "JSON object repeats a key", &err, file_path)
                .with_suggestion("Remove or rename the repeated key"),
        )),
        Err(err) => Err(ManifestError::Parse(
            located_entry(E_PARSE_ERROR, "JSON parse error", &err, file_path)
                .with_suggestion("Check JSON syntax"),
        )),
    }
}

/// Parse a restricted trace manifest
pub fn parse_manifest(content: &str, file_path: &str) -> Result<Manifest, ManifestError> {
    let Value::Object(mut root) = parse_strict(content, file_path)? else {
        return Err(ManifestError::InvalidType(
            ErrorEntry::error(
                E_INVALID_TYPE,
                "Manifest must be a JSON object",
                file_path,
                "$",
            )
            .with_suggestion("Wrap the trace list in { \"traces\": [...] }"),
        ));
    };

    let Some(traces) = root.remove(TRACES_KEY) else {
        return Err(ManifestError::MissingField(
            ErrorEntry::error(
                E_MISSING_FIELD,
                "Trace data missing traces key.",
                file_path,
                "$.traces",
            )
            .with_suggestion("Add a 'traces' array listing the trace names"),
        ));
    };

    let items = match traces {
        Value::Array(items) => items,
        other => {
            return Err(ManifestError::InvalidType(ErrorEntry::error(
                E_INVALID_TYPE,
                format!("'traces' must be an array, found {}", type_name(&other)),
                file_path,
                "$.traces",
            )));
        }
    };

    let mut names = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        match item {
            Value::String(name) => names.push(name),
            other => {
                return Err(ManifestError::InvalidType(ErrorEntry::error(
                    E_INVALID_TYPE,
                    format!("Trace entry must be a string, found {}", type_name(&other)),
                    file_path,
                    &format!("$.traces[{i}]"),
                )));
            }
        }
    }

    tracing::debug!(file = file_path, count = names.len(), "parsed manifest");
    Ok(Manifest { traces: names })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn located_entry(code: &str, what: &str, err: &serde_json::Error, file_path: &str) -> ErrorEntry {
    let path = format!("$.line:{}:col:{}", err.line(), err.column());
    ErrorEntry::error(code, format!("{what}: {err}"), file_path, &path)
}

/// A JSON value deserialized through [`StrictVisitor`].
struct StrictValue(Value);

impl<'de> Deserialize<'de> for StrictValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StrictVisitor).map(StrictValue)
    }
}

/// Builds a `serde_json::Value`, failing on the first repeated object key
/// instead of letting the later entry win.
struct StrictVisitor;

impl<'de> Visitor<'de> for StrictVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any valid JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Number::from_f64(v).map_or(Value::Null, Value::Number))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        StrictValue::deserialize(deserializer).map(|StrictValue(v)| v)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::new();
        while let Some(StrictValue(value)) = seq.next_element()? {
            values.push(value);
        }
        Ok(Value::Array(values))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries: IndexMap<String, Value> = IndexMap::new();
        while let Some(key) = access.next_key::<String>()? {
            if entries.contains_key(&key) {
                return Err(de::Error::custom(format_args!("duplicate key `{key}`")));
            }
            let StrictValue(value) = access.next_value()?;
            entries.insert(key, value);
        }
        Ok(Value::Object(entries.into_iter().collect()))
    }
}
