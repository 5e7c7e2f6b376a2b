use crate::domain::a001_form_schema::FieldSpec;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

// ============================================================================
// Entered values
// ============================================================================

/// Values currently typed into the form, keyed by field id.
///
/// Fields sharing an id share one entry, so duplicate ids bind to the same
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(HashMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    /// Value bound to `id`, empty when nothing was entered yet.
    pub fn value_of(&self, id: &str) -> &str {
        self.get(id).unwrap_or("")
    }

    pub fn set(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.0.insert(id.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ============================================================================
// Submission results
// ============================================================================

/// Validated submission: one entry per rendered field id, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDataRecord {
    entries: Vec<(String, String)>,
}

impl FormDataRecord {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Record as a JSON object indented by two spaces.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl Serialize for FormDataRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Ids of required fields left empty on a submission attempt, in schema
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrorSet {
    ids: Vec<String>,
}

impl ValidationErrorSet {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn insert(&mut self, id: &str) {
        if !self.contains(id) {
            self.ids.push(id.to_string());
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.ids.retain(|i| i != id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

// ============================================================================
// Validation
// ============================================================================

/// True when a required field `spec` has nothing in it.
pub fn is_missing_required(spec: &FieldSpec, values: &FormValues) -> bool {
    spec.is_rendered() && spec.required && values.value_of(&spec.id).is_empty()
}

/// Check every rendered field and build the record, or collect the ids of
/// required fields that are empty.
///
/// Presence is the only rule: an `email` field is not checked for format.
/// Fields that render no widget are neither checked nor recorded.
pub fn validate_on_submit(
    values: &FormValues,
    fields: &[FieldSpec],
) -> Result<FormDataRecord, ValidationErrorSet> {
    let mut errors = ValidationErrorSet::default();
    let mut record = FormDataRecord::default();

    for spec in fields.iter().filter(|f| f.is_rendered()) {
        if is_missing_required(spec, values) {
            errors.insert(&spec.id);
        }
        if record.get(&spec.id).is_none() {
            record
                .entries
                .push((spec.id.clone(), values.value_of(&spec.id).to_string()));
        }
    }

    if errors.is_empty() {
        Ok(record)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_form_schema::FieldKind;

    fn survey_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("name", FieldKind::Text, "Name", true),
            FieldSpec::new("email", FieldKind::Email, "Email", true),
            FieldSpec::new("feedback", FieldKind::TextArea, "Feedback", false),
        ]
    }

    #[test]
    fn test_required_empty_is_rejected() {
        let values: FormValues = [("name", "Alice"), ("email", ""), ("feedback", "")]
            .into_iter()
            .collect();
        let errors = validate_on_submit(&values, &survey_fields()).unwrap_err();
        assert_eq!(errors.ids().collect::<Vec<_>>(), vec!["email"]);
    }

    #[test]
    fn test_absent_value_counts_as_empty() {
        let errors = validate_on_submit(&FormValues::new(), &survey_fields()).unwrap_err();
        assert_eq!(errors.ids().collect::<Vec<_>>(), vec!["name", "email"]);
        assert!(!errors.contains("feedback"));
    }

    #[test]
    fn test_accepted_record_includes_empty_optional() {
        let values: FormValues = [("name", "Alice"), ("email", "a@b.com")].into_iter().collect();
        let record = validate_on_submit(&values, &survey_fields()).unwrap();
        assert_eq!(
            record.entries().collect::<Vec<_>>(),
            vec![("name", "Alice"), ("email", "a@b.com"), ("feedback", "")]
        );
    }

    #[test]
    fn test_no_email_format_check() {
        let values: FormValues = [("name", "Bob"), ("email", "not an address")]
            .into_iter()
            .collect();
        assert!(validate_on_submit(&values, &survey_fields()).is_ok());
    }

    #[test]
    fn test_whitespace_satisfies_required() {
        let values: FormValues = [("name", " "), ("email", "\t")].into_iter().collect();
        assert!(validate_on_submit(&values, &survey_fields()).is_ok());
    }

    #[test]
    fn test_values_outside_schema_are_dropped() {
        let values: FormValues = [("name", "Alice"), ("email", "a@b.com"), ("stale", "x")]
            .into_iter()
            .collect();
        let record = validate_on_submit(&values, &survey_fields()).unwrap();
        assert_eq!(record.get("stale"), None);
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_unrendered_required_field_is_ignored() {
        let fields = vec![
            FieldSpec::new("name", FieldKind::Text, "Name", false),
            FieldSpec::new("when", FieldKind::Unrecognized("date".into()), "When", true),
            FieldSpec::new("", FieldKind::Text, "Anonymous", true),
        ];
        let record = validate_on_submit(&FormValues::new(), &fields).unwrap();
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn test_duplicate_ids_share_one_entry() {
        let fields = vec![
            FieldSpec::new("dup", FieldKind::Text, "First", false),
            FieldSpec::new("other", FieldKind::Text, "Other", false),
            FieldSpec::new("dup", FieldKind::TextArea, "Second", true),
        ];

        let errors = validate_on_submit(&FormValues::new(), &fields).unwrap_err();
        assert_eq!(errors.ids().collect::<Vec<_>>(), vec!["dup"]);

        let values: FormValues = [("dup", "shared")].into_iter().collect();
        let record = validate_on_submit(&values, &fields).unwrap();
        assert_eq!(
            record.entries().collect::<Vec<_>>(),
            vec![("dup", "shared"), ("other", "")]
        );
    }

    #[test]
    fn test_pretty_json_keeps_schema_order() {
        let values: FormValues = [("name", "Alice"), ("email", "a@b.com")].into_iter().collect();
        let record = validate_on_submit(&values, &survey_fields()).unwrap();
        assert_eq!(
            record.to_pretty_json(),
            "{\n  \"name\": \"Alice\",\n  \"email\": \"a@b.com\",\n  \"feedback\": \"\"\n}"
        );
    }

    #[test]
    fn test_error_set_operations() {
        let mut errors = ValidationErrorSet::default();
        errors.insert("a");
        errors.insert("a");
        errors.insert("b");
        assert_eq!(errors.len(), 2);
        errors.remove("a");
        assert!(!errors.contains("a"));
        errors.clear();
        assert!(errors.is_empty());
    }
}
