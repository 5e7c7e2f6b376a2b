//! Form submission: entered values, required-field validation and the
//! per-attempt outcome.

pub mod aggregate;
pub mod session;

pub use aggregate::{
    is_missing_required, validate_on_submit, FormDataRecord, FormValues, ValidationErrorSet,
};
pub use session::{FormSession, SubmitOutcome};
