//! Total normalization between persisted pair data and `PairCollection`.
//!
//! Persisted forms are loosely typed and may be malformed. Every missing or
//! ill-typed field has a documented default so the editor never blocks on
//! bad data:
//!
//! - input that is not an array yields an empty collection
//! - entries that are not objects are skipped
//! - `name` / `value`: strings as-is, numbers and booleans stringified,
//!   anything else `""`
//! - `enabled`: `true` unless an explicit boolean says otherwise
//! - `id`: kept when it is a non-empty string not already used, else fresh

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::collection::{Pair, PairCollection};

/// Serialized shape of one pair in an owning domain object.
///
/// Fields are ordered alphabetically for deterministic serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Whether the field is sent.
    pub enabled: bool,
    /// Stable pair id.
    pub id: String,
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: String,
}

impl FormField {
    /// Converts the field into its JSON object representation.
    #[must_use]
    pub fn into_value(self) -> Value {
        let mut object = Map::new();
        object.insert("enabled".into(), Value::Bool(self.enabled));
        object.insert("id".into(), Value::String(self.id));
        object.insert("name".into(), Value::String(self.name));
        object.insert("value".into(), Value::String(self.value));
        Value::Object(object)
    }
}

impl From<&Pair> for FormField {
    fn from(pair: &Pair) -> Self {
        Self {
            enabled: pair.enabled,
            id: pair.id.clone(),
            name: pair.name.clone(),
            value: pair.value.clone(),
        }
    }
}

impl From<FormField> for Pair {
    fn from(field: FormField) -> Self {
        Self::with_id(field.id, field.name, field.value, field.enabled)
    }
}

/// Normalizes loosely-typed persisted data into a collection. Never fails.
#[must_use]
pub fn from_domain(raw: &Value) -> PairCollection {
    let Some(entries) = raw.as_array() else {
        if !raw.is_null() {
            tracing::debug!(kind = value_kind(raw), "pair data is not an array, using empty");
        }
        return PairCollection::new();
    };

    entries.iter().filter_map(normalize_entry).collect()
}

/// Serializes every pair, disabled ones included, in collection order.
#[must_use]
pub fn to_domain(pairs: &PairCollection) -> Value {
    Value::Array(
        pairs
            .iter()
            .map(|p| FormField::from(p).into_value())
            .collect(),
    )
}

fn normalize_entry(entry: &Value) -> Option<Pair> {
    let Some(object) = entry.as_object() else {
        tracing::debug!(kind = value_kind(entry), "skipping non-object pair entry");
        return None;
    };

    let id = match object.get("id") {
        Some(Value::String(id)) => id.clone(),
        _ => String::new(),
    };
    let enabled = object
        .get("enabled")
        .and_then(Value::as_bool)
        .unwrap_or(true);

    Some(Pair::with_id(
        id,
        text_field(object.get("name")),
        text_field(object.get("value")),
        enabled,
    ))
}

fn text_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
