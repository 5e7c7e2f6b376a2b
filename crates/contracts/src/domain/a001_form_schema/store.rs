use super::aggregate::{parse_schema, SchemaDocument, SAMPLE_SCHEMA};

/// Result of feeding new text to the [`SchemaStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaUpdate {
    /// The text parsed and the published schema was replaced.
    Replaced,
    /// The text did not parse; the last good schema stays published.
    KeptPrevious,
}

/// Editable schema text plus the last schema that parsed from it.
///
/// The raw text is stored verbatim even when invalid so the editor can show
/// it back. The published schema is only ever replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaStore {
    raw_text: String,
    schema: SchemaDocument,
    revision: u64,
}

impl SchemaStore {
    /// Start with `text` in the editor. If it does not parse, an empty schema
    /// is published until the first valid edit.
    pub fn new(text: impl Into<String>) -> Self {
        let mut store = Self {
            raw_text: String::new(),
            schema: SchemaDocument::default(),
            revision: 0,
        };
        store.set_raw_text(text);
        store
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn schema(&self) -> &SchemaDocument {
        &self.schema
    }

    /// Number of times the published schema has been replaced.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_raw_text(&mut self, text: impl Into<String>) -> SchemaUpdate {
        self.raw_text = text.into();
        match parse_schema(&self.raw_text) {
            Ok(schema) => {
                self.schema = schema;
                self.revision += 1;
                SchemaUpdate::Replaced
            }
            Err(e) => {
                log::warn!("schema not applied, keeping previous: {}", e);
                SchemaUpdate::KeptPrevious
            }
        }
    }
}

impl Default for SchemaStore {
    fn default() -> Self {
        Self::new(SAMPLE_SCHEMA)
    }
}
