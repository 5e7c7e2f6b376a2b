use contracts::domain::a001_form_schema::{SchemaStore, SchemaUpdate, SAMPLE_SCHEMA};
use contracts::domain::a002_form_submission::{FormSession, SubmitOutcome};

fn fill(session: &mut FormSession, store: &SchemaStore, values: &[(&str, &str)]) {
    for (id, value) in values {
        session.set_value(&store.schema().fields, id, *value);
    }
}

#[test]
fn survey_missing_email_is_rejected() {
    let store = SchemaStore::default();
    let mut session = FormSession::new();
    fill(&mut session, &store, &[("name", "Alice"), ("email", ""), ("feedback", "")]);

    match session.submit(&store.schema().fields) {
        SubmitOutcome::Rejected(errors) => {
            assert_eq!(errors.ids().collect::<Vec<_>>(), vec!["email"]);
        }
        SubmitOutcome::Accepted(record) => panic!("unexpected record {:?}", record),
    }
    assert!(session.submitted().is_none());
}

#[test]
fn survey_complete_is_accepted() {
    let store = SchemaStore::default();
    let mut session = FormSession::new();
    fill(&mut session, &store, &[("name", "Alice"), ("email", "a@b.com"), ("feedback", "")]);

    let SubmitOutcome::Accepted(record) = session.submit(&store.schema().fields) else {
        panic!("submission rejected");
    };
    assert_eq!(
        record.entries().collect::<Vec<_>>(),
        vec![("name", "Alice"), ("email", "a@b.com"), ("feedback", "")]
    );
}

#[test]
fn invalid_edit_keeps_rendered_fields() {
    let mut store = SchemaStore::default();
    let before = store.schema().derive_fields().to_vec();

    assert_eq!(store.set_raw_text("{ \"fields\": [ "), SchemaUpdate::KeptPrevious);
    assert_eq!(store.schema().derive_fields(), before.as_slice());
}

#[test]
fn unrecognized_type_never_reaches_record_or_errors() {
    let schema = SAMPLE_SCHEMA.replace(
        r#"{ "id": "feedback", "type": "textarea", "label": "Feedback", "required": false }"#,
        r#"{ "id": "feedback", "type": "textarea", "label": "Feedback", "required": false },
    { "id": "visit", "type": "date", "label": "Visit date", "required": true }"#,
    );
    let store = SchemaStore::new(schema);
    assert_eq!(store.schema().fields.len(), 4);
    assert_eq!(store.schema().rendered_fields().count(), 3);

    let mut session = FormSession::new();
    if let SubmitOutcome::Rejected(errors) = session.submit(&store.schema().fields) {
        assert!(!errors.contains("visit"));
    }

    fill(&mut session, &store, &[("name", "Alice"), ("email", "a@b.com"), ("visit", "today")]);
    let SubmitOutcome::Accepted(record) = session.submit(&store.schema().fields) else {
        panic!("submission rejected");
    };
    assert_eq!(record.keys().collect::<Vec<_>>(), vec!["name", "email", "feedback"]);
}

#[test]
fn values_survive_schema_replacement() {
    let mut store = SchemaStore::default();
    let mut session = FormSession::new();
    fill(&mut session, &store, &[("name", "Alice")]);
    session.submit(&store.schema().fields);
    assert!(session.has_error("email"));

    let update = store.set_raw_text(
        r#"{"formTitle": "Short", "fields": [{"id": "name", "type": "text", "label": "Name", "required": true}]}"#,
    );
    assert_eq!(update, SchemaUpdate::Replaced);
    session.on_schema_replaced();
    assert!(session.errors().is_empty());

    let SubmitOutcome::Accepted(record) = session.submit(&store.schema().fields) else {
        panic!("submission rejected");
    };
    assert_eq!(record.to_pretty_json(), "{\n  \"name\": \"Alice\"\n}");
}
