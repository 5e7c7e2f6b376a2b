use serde_json::{Map, Value};
use thiserror::Error;

/// Schema shown in the editor when the application starts.
pub const SAMPLE_SCHEMA: &str = r#"{
  "formTitle": "Survey Form",
  "formDescription": "Please fill out this form.",
  "fields": [
    { "id": "name", "type": "text", "label": "Name", "required": true },
    { "id": "email", "type": "email", "label": "Email", "required": true },
    { "id": "feedback", "type": "textarea", "label": "Feedback", "required": false }
  ]
}"#;

// ============================================================================
// Errors
// ============================================================================

/// Reasons a raw schema text could not become a [`SchemaDocument`].
#[derive(Debug, Error)]
pub enum SchemaParseError {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("schema must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("\"fields\" must be an array, got {0}")]
    FieldsNotAnArray(&'static str),
}

// ============================================================================
// Field kinds and widgets
// ============================================================================

/// Kind of control a field asks for, taken from its `type` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
    /// A `type` string that no widget exists for.
    Unrecognized(String),
    /// No `type` key, or a non-string one.
    Missing,
}

impl FieldKind {
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "text" => FieldKind::Text,
            "email" => FieldKind::Email,
            "textarea" => FieldKind::TextArea,
            other => FieldKind::Unrecognized(other.to_string()),
        }
    }

    /// Widget emitted for this kind, `None` for the unrecognized arms.
    pub fn widget(&self) -> Option<FieldWidget> {
        match self {
            FieldKind::Text => Some(FieldWidget::Input(InputKind::Text)),
            FieldKind::Email => Some(FieldWidget::Input(InputKind::Email)),
            FieldKind::TextArea => Some(FieldWidget::TextArea),
            FieldKind::Unrecognized(_) | FieldKind::Missing => None,
        }
    }
}

/// HTML `type` attribute of a single-line input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
        }
    }
}

/// Control rendered for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidget {
    Input(InputKind),
    TextArea,
}

// ============================================================================
// Schema document
// ============================================================================

/// One entry of the schema's `fields` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: String,
    pub kind: FieldKind,
    pub label: String,
    pub required: bool,
}

impl FieldSpec {
    pub fn new(id: &str, kind: FieldKind, label: &str, required: bool) -> Self {
        Self {
            id: id.to_string(),
            kind,
            label: label.to_string(),
            required,
        }
    }

    /// Widget for this field. A field without an id cannot be bound, so it
    /// renders only its label.
    pub fn widget(&self) -> Option<FieldWidget> {
        if self.id.is_empty() {
            return None;
        }
        self.kind.widget()
    }

    pub fn is_rendered(&self) -> bool {
        self.widget().is_some()
    }

    fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::new("", FieldKind::Missing, "", false);
        };

        let id = match obj.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        let kind = match obj.get("type") {
            Some(Value::String(s)) => FieldKind::from_type_name(s),
            _ => FieldKind::Missing,
        };
        let required = matches!(obj.get("required"), Some(Value::Bool(true)));

        Self {
            id,
            kind,
            label: display_text(obj, "label"),
            required,
        }
    }
}

/// Parsed schema: title, description and the ordered field list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaDocument {
    pub form_title: String,
    pub form_description: String,
    pub fields: Vec<FieldSpec>,
}

impl SchemaDocument {
    /// Field list in schema order, unknown kinds included.
    pub fn derive_fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Fields that produce a widget, in schema order.
    pub fn rendered_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.is_rendered())
    }
}

/// Parse raw editor text into a [`SchemaDocument`].
///
/// Only the top-level shape is enforced: the text must be a JSON object and
/// `fields`, when present and non-null, must be an array. Everything inside a
/// field entry is read leniently.
pub fn parse_schema(text: &str) -> Result<SchemaDocument, SchemaParseError> {
    let value: Value = serde_json::from_str(text)?;
    let obj = match &value {
        Value::Object(obj) => obj,
        other => return Err(SchemaParseError::NotAnObject(json_type_name(other))),
    };

    let fields = match obj.get("fields") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(FieldSpec::from_value).collect(),
        Some(other) => return Err(SchemaParseError::FieldsNotAnArray(json_type_name(other))),
    };

    for field in &fields {
        if let FieldKind::Unrecognized(name) = &field.kind {
            log::debug!("field '{}' has unrecognized type '{}', not rendered", field.id, name);
        }
    }

    Ok(SchemaDocument {
        form_title: display_text(obj, "formTitle"),
        form_description: display_text(obj, "formDescription"),
        fields,
    })
}

/// Text shown for a scalar value: strings verbatim, numbers and booleans as
/// JSON, everything else as empty.
fn display_text(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
