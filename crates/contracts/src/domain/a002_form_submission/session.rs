use super::aggregate::{
    is_missing_required, validate_on_submit, FormDataRecord, FormValues, ValidationErrorSet,
};
use crate::domain::a001_form_schema::FieldSpec;

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(FormDataRecord),
    Rejected(ValidationErrorSet),
}

/// Input state of the rendered form across submission attempts.
///
/// Validation runs synchronously inside [`FormSession::submit`], so the
/// session is always idle between calls. A rejected attempt leaves the
/// entered values and the last accepted record untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSession {
    values: FormValues,
    errors: ValidationErrorSet,
    submit_count: u32,
    submitted: Option<FormDataRecord>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrorSet {
        &self.errors
    }

    pub fn has_error(&self, id: &str) -> bool {
        self.errors.contains(id)
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Last accepted record, shown in the submitted data viewer.
    pub fn submitted(&self) -> Option<&FormDataRecord> {
        self.submitted.as_ref()
    }

    /// Store a value typed into the control bound to `id`.
    ///
    /// Once the form has been submitted, the marker of the edited field is
    /// recomputed so it clears as soon as the field is filled in.
    pub fn set_value(&mut self, fields: &[FieldSpec], id: &str, value: impl Into<String>) {
        self.values.set(id, value);
        if self.submit_count == 0 {
            return;
        }

        let missing = fields
            .iter()
            .filter(|f| f.id == id)
            .any(|f| is_missing_required(f, &self.values));
        if missing {
            self.errors.insert(id);
        } else {
            self.errors.remove(id);
        }
    }

    pub fn submit(&mut self, fields: &[FieldSpec]) -> SubmitOutcome {
        self.submit_count += 1;
        match validate_on_submit(&self.values, fields) {
            Ok(record) => {
                log::info!("form data: {}", record.to_pretty_json());
                self.errors.clear();
                self.submitted = Some(record.clone());
                SubmitOutcome::Accepted(record)
            }
            Err(errors) => {
                log::debug!(
                    "submission rejected, required fields empty: {:?}",
                    errors.ids().collect::<Vec<_>>()
                );
                self.errors = errors.clone();
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    /// Drop error markers after the schema was replaced. Values are kept,
    /// keyed by id, so unchanged fields keep their input.
    pub fn on_schema_replaced(&mut self) {
        self.errors.clear();
    }
}
