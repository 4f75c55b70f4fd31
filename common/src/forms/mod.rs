//! Form synthesis from a record type's field schema.
//!
//! The admin console never hard-codes a form: both the blank creation form and
//! the per-record edit forms are derived here from the `Vec<FieldSchema>` the
//! server reports. A `FormDescriptor` is plain data: the view renders it and
//! input events write back into it through `set_text` / `set_flag`.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::record::{Record, RecordId, display_value, is_truthy};
use crate::model::record_type::RecordType;
use crate::model::schema::{FieldSchema, InputKind};
use crate::requests::MutationRequest;

/// Current value of one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    fn is_filled(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.trim().is_empty(),
            // A checkbox always carries a value.
            FieldValue::Flag(_) => true,
        }
    }

    fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(text) => Value::String(text.clone()),
            FieldValue::Flag(checked) => Value::Bool(*checked),
        }
    }
}

/// One rendered input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: InputKind,
    pub required: bool,
    pub value: FieldValue,
    pub max_length: Option<u32>,
    pub step: Option<String>,
}

impl FormField {
    fn from_schema(schema: &FieldSchema, value: FieldValue) -> Self {
        Self {
            name: schema.name.clone(),
            label: schema.label(),
            kind: schema.input_kind,
            required: schema.is_required(),
            value,
            max_length: schema.max_length.filter(|n| *n > 0),
            step: schema.step.clone().filter(|_| schema.input_kind == InputKind::Number),
        }
    }

    /// Hint rendered under inputs with a length limit.
    pub fn max_length_hint(&self) -> Option<String> {
        self.max_length.map(|n| format!("Maximum length: {n}"))
    }

    pub fn text(&self) -> &str {
        match &self.value {
            FieldValue::Text(text) => text,
            FieldValue::Flag(_) => "",
        }
    }

    pub fn checked(&self) -> bool {
        matches!(self.value, FieldValue::Flag(true))
    }
}

/// Required fields left blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<String>,
}

/// A synthesized form: the create form when `record_id` is `None`, the edit
/// form of that record otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDescriptor {
    pub record_type: RecordType,
    /// Hidden identifier of the edited record; never rendered as an input.
    pub record_id: Option<RecordId>,
    pub fields: Vec<FormField>,
}

impl FormDescriptor {
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn set_text(&mut self, name: &str, text: String) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = FieldValue::Text(text);
        }
    }

    pub fn set_flag(&mut self, name: &str, checked: bool) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = FieldValue::Flag(checked);
        }
    }

    /// Every required field must hold a non-blank value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<String> = self
            .fields
            .iter()
            .filter(|f| f.required && !f.value.is_filled())
            .map(|f| f.label.clone())
            .collect();
        if missing.is_empty() { Ok(()) } else { Err(ValidationError { missing }) }
    }

    /// Field values keyed by column name; edit forms add the record `id`.
    pub fn payload(&self) -> Map<String, Value> {
        let mut data: Map<String, Value> =
            self.fields.iter().map(|f| (f.name.clone(), f.value.to_json())).collect();
        if let Some(id) = &self.record_id {
            data.insert("id".to_string(), Value::String(id.to_string()));
        }
        data
    }

    /// Validates and builds the create/update request body. An `Err` means no
    /// request may be sent.
    pub fn submission(&self) -> Result<MutationRequest, ValidationError> {
        self.validate()?;
        Ok(MutationRequest {
            table_name: self.record_type.clone(),
            data: self.payload(),
        })
    }
}

/// Blank creation form: one input per editable field, seeded with the
/// schema defaults.
pub fn build_create_form(record_type: &RecordType, schemas: &[FieldSchema]) -> FormDescriptor {
    let fields = schemas
        .iter()
        .filter(|s| s.is_editable())
        .map(|s| {
            let value = match s.input_kind {
                InputKind::Checkbox => FieldValue::Flag(s.default_value.as_ref().is_some_and(is_truthy)),
                _ => FieldValue::Text(s.default_value.as_ref().and_then(display_value).unwrap_or_default()),
            };
            FormField::from_schema(s, value)
        })
        .collect();

    FormDescriptor { record_type: record_type.clone(), record_id: None, fields }
}

/// Edit form of one record, pre-filled from its current values.
pub fn build_edit_form(record_type: &RecordType, record: &Record, schemas: &[FieldSchema]) -> FormDescriptor {
    let fields = schemas
        .iter()
        .filter(|s| s.is_editable())
        .map(|s| {
            let current = record.get(&s.name);
            let value = match s.input_kind {
                InputKind::Checkbox => FieldValue::Flag(current.is_some_and(is_truthy)),
                _ => FieldValue::Text(current.and_then(display_value).unwrap_or_default()),
            };
            FormField::from_schema(s, value)
        })
        .collect();

    FormDescriptor {
        record_type: record_type.clone(),
        record_id: Some(record.id()),
        fields,
    }
}
