//! Schema editor panel: free-text editing plus a highlighted read-only
//! preview of the same text.

mod view;

pub use view::SchemaEditor;
