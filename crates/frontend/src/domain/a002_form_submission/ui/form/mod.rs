//! Form rendered from the published schema.
//!
//! - view.rs: title, description, field list, submit and the submitted data
//! - field.rs: label, widget and required marker of a single field

mod field;
mod view;

pub use field::FieldControl;
pub use view::SchemaForm;
