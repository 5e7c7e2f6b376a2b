pub mod a001_form_schema;
pub mod a002_form_submission;
