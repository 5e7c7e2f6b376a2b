use contracts::domain::a001_form_schema::{SchemaDocument, SchemaStore, SchemaUpdate};
use contracts::domain::a002_form_submission::FormSession;
use leptos::prelude::*;

/// Application state shared through context.
///
/// Components read the signals directly but change them only through the
/// transition methods below, which keep the store and the session in step.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub store: RwSignal<SchemaStore>,
    pub session: RwSignal<FormSession>,
}

impl AppGlobalContext {
    pub fn new(initial_text: &str) -> Self {
        Self {
            store: RwSignal::new(SchemaStore::new(initial_text)),
            session: RwSignal::new(FormSession::new()),
        }
    }

    /// Published schema, only notifying when a valid edit changed it.
    pub fn schema_memo(&self) -> Memo<SchemaDocument> {
        let store = self.store;
        Memo::new(move |_| store.with(|s| s.schema().clone()))
    }

    pub fn set_raw_text(&self, text: String) {
        let mut update = SchemaUpdate::KeptPrevious;
        self.store.update(|s| update = s.set_raw_text(text));
        if update == SchemaUpdate::Replaced {
            self.session.update(|s| s.on_schema_replaced());
        }
    }

    pub fn set_value(&self, id: &str, value: String) {
        let session = self.session;
        self.store.with_untracked(|store| {
            session.update(|s| s.set_value(&store.schema().fields, id, value));
        });
    }

    pub fn submit(&self) {
        let session = self.session;
        self.store.with_untracked(|store| {
            session.update(|s| {
                s.submit(&store.schema().fields);
            });
        });
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
