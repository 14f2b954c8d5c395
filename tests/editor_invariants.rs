//! Record Editor Invariant Tests
//!
//! - Save requires every required field; the error names exactly the
//!   empty ones
//! - Editing pre-populates the active optional set from the record
//! - Hidden optional values are retained in form state but dropped from
//!   the save payload
//! - Save output round-trips through the store

use chrono::Utc;
use ruledesk::editor::{EditSession, SaveRequest};
use ruledesk::schema::{RecordDraft, RecordId, RuleRecord, RuleSchema};
use ruledesk::store::{MemoryStore, RuleStore};

// =============================================================================
// Helper Functions
// =============================================================================

const REQUIRED: [(&str, &str); 6] = [
    ("Rule Type", "Standard"),
    ("MD State", "NY"),
    ("Ship to State", "CA"),
    ("Zip Code", "90210"),
    ("Channel", "Retail"),
    ("Reg Cat Code", "RC001"),
];

fn fill_required(session: &mut EditSession) {
    for (field, value) in REQUIRED {
        session.set_value(field, value).unwrap();
    }
}

fn stored_record(extra: &[(&str, &str)]) -> RuleRecord {
    let mut draft = RecordDraft::new();
    for (field, value) in REQUIRED {
        draft.set(field, value);
    }
    for (field, value) in extra {
        draft.set(*field, *value);
    }
    RuleRecord::new(RecordId::generate(), &RuleSchema::default(), draft, Utc::now()).unwrap()
}

// =============================================================================
// Required-Field Validation
// =============================================================================

/// Saving with every required field empty names all six, in order.
#[test]
fn test_save_empty_names_all_required() {
    let session = EditSession::create(RuleSchema::default());
    let err = session.save().unwrap_err();

    let expected: Vec<&str> = REQUIRED.iter().map(|(f, _)| *f).collect();
    assert_eq!(err.missing, expected);
}

/// The error names exactly the empty fields, nothing more.
#[test]
fn test_save_names_only_empty_fields() {
    let mut session = EditSession::create(RuleSchema::default());
    fill_required(&mut session);
    session.set_value("MD State", "").unwrap();

    let err = session.save().unwrap_err();
    assert_eq!(err.missing, ["MD State"]);
}

/// All six populated saves regardless of optional fields.
#[test]
fn test_save_succeeds_with_required_only() {
    let mut session = EditSession::create(RuleSchema::default());
    fill_required(&mut session);
    assert!(session.save().is_ok());
}

/// Validation does not latch: fixing the field and re-saving succeeds.
#[test]
fn test_revalidation_after_fix() {
    let mut session = EditSession::create(RuleSchema::default());
    fill_required(&mut session);
    session.set_value("Channel", "").unwrap();
    assert!(session.save().is_err());

    session.set_value("Channel", "Mail").unwrap();
    assert!(session.save().is_ok());
}

// =============================================================================
// Edit Pre-Population
// =============================================================================

/// A populated optional field joins the active set, pre-filled.
#[test]
fn test_populated_optional_field_is_active() {
    let record = stored_record(&[("Drug Schedule", "II")]);
    let session = EditSession::edit(RuleSchema::default(), &record);

    assert!(session.active_optional().contains(&"Drug Schedule".to_string()));
    assert_eq!(session.value("Drug Schedule"), Some("II"));
}

/// An unpopulated optional field stays out of the active set.
#[test]
fn test_unpopulated_optional_field_is_inactive() {
    let record = stored_record(&[]);
    let session = EditSession::edit(RuleSchema::default(), &record);

    assert!(session.active_optional().is_empty());
    assert_eq!(session.visible_fields().len(), 6);
}

// =============================================================================
// Hidden-Value Policy
// =============================================================================

/// Values for deselected fields stay in form state but never save.
#[test]
fn test_hidden_values_dropped_from_payload() {
    let mut session = EditSession::create(RuleSchema::default());
    fill_required(&mut session);
    session.select_optional(vec!["Quantity".into()]).unwrap();
    session.set_value("Quantity", "30").unwrap();
    session.select_optional(vec![]).unwrap();

    assert_eq!(session.value("Quantity"), Some("30"));
    match session.save().unwrap() {
        SaveRequest::Insert(draft) => assert_eq!(draft.value("Quantity"), None),
        other => panic!("expected insert, got {:?}", other),
    }
}

// =============================================================================
// Store Round-Trip
// =============================================================================

/// A creation session's payload inserts cleanly.
#[tokio::test]
async fn test_create_session_round_trip() {
    let store = MemoryStore::new();
    let mut session = EditSession::create(RuleSchema::default());
    fill_required(&mut session);

    let draft = match session.save().unwrap() {
        SaveRequest::Insert(draft) => draft,
        other => panic!("expected insert, got {:?}", other),
    };
    let record = store.insert(draft).await.unwrap();

    assert_eq!(record.value("Rule Type"), Some("Standard"));
    assert_eq!(store.list().await.unwrap().len(), 1);
}

/// An edit session's payload updates in place, id preserved.
#[tokio::test]
async fn test_edit_session_round_trip() {
    let store = MemoryStore::new();
    let mut draft = RecordDraft::new();
    for (field, value) in REQUIRED {
        draft.set(field, value);
    }
    let original = store.insert(draft.with("Protocol", "Standard")).await.unwrap();

    let mut session = EditSession::edit(RuleSchema::default(), &original);
    session.set_value("Protocol", "Expedited").unwrap();

    let (id, draft) = match session.save().unwrap() {
        SaveRequest::Update(id, draft) => (id, draft),
        other => panic!("expected update, got {:?}", other),
    };
    assert_eq!(id, original.id());

    let updated = store.update(id, draft).await.unwrap();
    assert_eq!(updated.id(), original.id());
    assert_eq!(updated.value("Protocol"), Some("Expedited"));
}
