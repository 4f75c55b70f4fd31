use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The widget a column is edited with, as reported by `/admin/get-columns`.
///
/// The server derives it from the SQL column type (`INT` → number, `BOOL` →
/// checkbox, long `VARCHAR`/`TEXT` → textarea, ...). Kinds this client does not
/// know are edited as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InputKind {
    Text,
    Number,
    Textarea,
    Checkbox,
    Date,
    DateTimeLocal,
}

impl InputKind {
    /// Value of the HTML `type` attribute for `<input>` based kinds.
    pub fn html_type(self) -> &'static str {
        match self {
            InputKind::Text | InputKind::Textarea => "text",
            InputKind::Number => "number",
            InputKind::Checkbox => "checkbox",
            InputKind::Date => "date",
            InputKind::DateTimeLocal => "datetime-local",
        }
    }
}

impl From<String> for InputKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "number" => InputKind::Number,
            "textarea" => InputKind::Textarea,
            "checkbox" => InputKind::Checkbox,
            "date" => InputKind::Date,
            "datetime-local" => InputKind::DateTimeLocal,
            _ => InputKind::Text,
        }
    }
}

impl From<InputKind> for String {
    fn from(kind: InputKind) -> Self {
        match kind {
            InputKind::Textarea => "textarea".to_string(),
            other => other.html_type().to_string(),
        }
    }
}

/// Server-described shape of one column of a record type.
///
/// A `Vec<FieldSchema>` is the whole schema of a type; it drives both the
/// blank creation form and the per-record edit forms in the admin console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Column name; the key of this field inside every record object.
    pub name: String,
    #[serde(rename = "input_type", default = "default_input_kind")]
    pub input_kind: InputKind,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(rename = "primary_key", default)]
    pub is_primary_key: bool,
    /// Server default. `null` decodes as `None`.
    #[serde(rename = "default", default)]
    pub default_value: Option<Value>,
    #[serde(default)]
    pub max_length: Option<u32>,
    /// Numeric step; the server sends it either as a string (`"0.01"`) or a number.
    #[serde(default, deserialize_with = "string_or_number")]
    pub step: Option<String>,
}

impl FieldSchema {
    /// Whether the field gets an editable input. Primary keys and `id`
    /// columns are carried as hidden identifiers instead.
    pub fn is_editable(&self) -> bool {
        !self.is_primary_key && !self.name.eq_ignore_ascii_case("id")
    }

    pub fn is_required(&self) -> bool {
        !self.nullable
    }

    /// Human label: underscores become spaces and every word is capitalised.
    pub fn label(&self) -> String {
        humanize(&self.name)
    }
}

/// Turns `first_name` into `First Name`.
pub fn humanize(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn default_input_kind() -> InputKind {
    InputKind::Text
}

fn default_nullable() -> bool {
    true
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
