use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::record_type::RecordType;

/// Identifier of a record, used to address it in update/delete calls and to
/// key its row in the admin list. Numeric ids are kept in their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One persisted item of a record type: a flat JSON object whose keys are the
/// column names of the type's schema.
///
/// The client assumes nothing about the values beyond what the schema's input
/// kind implies.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// The record's `id` field, stringified. Records without one get an empty id.
    pub fn id(&self) -> RecordId {
        RecordId::new(self.fields.get("id").and_then(display_value).unwrap_or_default())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Title of the record's row: `topic`, `title` or `name` when present,
    /// otherwise `"{type} #{id}"`.
    pub fn display_title(&self, record_type: &RecordType) -> String {
        ["topic", "title", "name"]
            .iter()
            .filter_map(|key| self.fields.get(*key).and_then(display_value))
            .find(|title| !title.is_empty())
            .unwrap_or_else(|| format!("{} #{}", record_type, self.id()))
    }

    /// Case-insensitive substring match against every non-null field value.
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .fields
                .values()
                .filter_map(display_value)
                .any(|value| value.to_lowercase().contains(needle))
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self::new(fields),
            _ => Self::default(),
        }
    }
}

/// Stringifies a JSON value the way it is shown in an input: strings verbatim,
/// other scalars in their JSON form. `null` has no text.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Checkbox state of a JSON value. Strings count as checked when they read
/// `true`, `1`, `yes` or `on`; the server serialises some flags as strings.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => {
            let s = s.trim();
            ["true", "1", "yes", "on"].iter().any(|t| s.eq_ignore_ascii_case(t))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::from(value)
    }

    #[test]
    fn id_is_stringified() {
        assert_eq!(record(json!({"id": 7})).id(), RecordId::from("7"));
        assert_eq!(record(json!({"id": "a-1"})).id(), RecordId::from("a-1"));
        assert_eq!(record(json!({"topic": "x"})).id(), RecordId::from(""));
    }

    #[test]
    fn title_prefers_topic_then_title_then_name() {
        let kind = RecordType::from("thoughts");
        assert_eq!(record(json!({"id": 1, "topic": "T", "title": "X"})).display_title(&kind), "T");
        assert_eq!(record(json!({"id": 1, "topic": "", "name": "N"})).display_title(&kind), "N");
        assert_eq!(record(json!({"id": 4, "topic": null})).display_title(&kind), "thoughts #4");
    }

    #[test]
    fn matching_skips_nulls_and_ignores_case() {
        let r = record(json!({"id": 12, "topic": "Flying Cars", "tag": null, "done": true}));
        assert!(r.matches("flying"));
        assert!(r.matches("12"));
        assert!(r.matches("true"));
        assert!(!r.matches("null"));
        assert!(r.matches(""));
    }

    #[test]
    fn truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("TRUE")));
        assert!(!is_truthy(&json!("false")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&Value::Null));
    }
}
