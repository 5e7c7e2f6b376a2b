//! Form schema: the JSON document that describes a form and the store that
//! keeps the last version of it that parsed.

pub mod aggregate;
pub mod store;

pub use aggregate::{
    parse_schema, FieldKind, FieldSpec, FieldWidget, InputKind, SchemaDocument, SchemaParseError,
    SAMPLE_SCHEMA,
};
pub use store::{SchemaStore, SchemaUpdate};
