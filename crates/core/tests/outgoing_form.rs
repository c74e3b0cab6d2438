//! Integration tests for the outgoing correspondence form
//!
//! Covers the department → division → employee cascade, required-field
//! validation and submit behaviour against a persistence port.

use chrono::{NaiveDate, TimeZone, Utc};
use diwan_core::{FormState, OutgoingForm, SubmitOutcome};
use diwan_domain::{
    Confidentiality, CorrespondenceDraft, DeliveryChannel, DraftEdit, DraftField, OutgoingStatus,
    Urgency, ValidationErrors,
};

mod support;
use support::fixtures::organisation;
use support::mocks::{MockCorrespondenceStore, MockDirectory};

async fn open_form() -> OutgoingForm {
    let mut form = OutgoingForm::new();
    form.initialize_at(None, Utc.with_ymd_and_hms(2025, 6, 15, 9, 45, 0).unwrap());
    form.load_references(&MockDirectory::new(organisation())).await;
    form
}

fn fill_required(form: &mut OutgoingForm) {
    form.set_field(DraftEdit::Recipient("Minister of Agriculture".into()));
    form.set_field(DraftEdit::Subject("Summer irrigation schedule".into()));
    form.set_field(DraftEdit::Department("dep-water".into()));
    form.set_field(DraftEdit::Division("div-canals".into()));
    form.set_field(DraftEdit::AssignedTo("emp-1".into()));
}

fn ids<T>(items: &[T], id: impl Fn(&T) -> String) -> Vec<String> {
    items.iter().map(id).collect()
}

// ============================================================================
// initialize
// ============================================================================

#[tokio::test]
async fn test_fresh_draft_defaults() {
    let form = open_form().await;
    let draft = form.draft();

    assert_eq!(form.state(), FormState::Open);
    assert!(draft.id.is_none());
    assert!(draft.number.starts_with("OUT-2025-"));
    assert_eq!(draft.number.len(), "OUT-2025-".len() + 6);
    assert_eq!(draft.date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
    assert_eq!(draft.confidentiality, Confidentiality::Normal);
    assert_eq!(draft.urgency, Urgency::Normal);
    assert_eq!(draft.status, OutgoingStatus::Draft);
    assert_eq!(draft.delivery_channel, DeliveryChannel::Mail);
    assert!(draft.recipient.is_empty());
    assert!(draft.department.is_empty());
    assert!(form.errors().is_empty());
}

#[tokio::test]
async fn test_existing_record_is_loaded_with_normalised_date() {
    // Arrange - an existing record whose date arrives as a timestamp
    let json = r#"{
        "id": "c-17",
        "number": "OUT-2024-000123",
        "date": "2024-11-03T22:15:00Z",
        "recipient": "Governor",
        "recipientOrganization": "Province Office",
        "subject": "Canal maintenance",
        "confidentiality": "secret",
        "urgency": "urgent",
        "status": "issued",
        "department": "dep-water",
        "division": "div-dams",
        "assignedTo": "emp-2",
        "notes": "",
        "deliveryChannel": "courier"
    }"#;
    let existing: CorrespondenceDraft = serde_json::from_str(json).unwrap();

    // Act
    let mut form = OutgoingForm::new();
    form.initialize(Some(existing.clone()));
    form.load_references(&MockDirectory::new(organisation())).await;

    // Assert - nothing stale, so nothing is cleared
    assert_eq!(form.draft(), &existing);
    assert_eq!(form.draft().date, NaiveDate::from_ymd_opt(2024, 11, 3).unwrap());
    assert_eq!(ids(form.available_employees(), |e| e.id.clone()), vec!["emp-2"]);
}

#[tokio::test]
async fn test_initialize_resets_errors() {
    let mut form = open_form().await;
    assert!(!form.validate());

    form.initialize(None);

    assert!(form.errors().is_empty());
}

// ============================================================================
// cascade
// ============================================================================

#[tokio::test]
async fn test_department_filters_divisions_and_employees() {
    let mut form = open_form().await;

    let cleared = form.set_field(DraftEdit::Department("dep-water".into()));

    assert!(cleared.is_empty());
    assert_eq!(ids(form.available_divisions(), |d| d.id.clone()), vec!["div-canals", "div-dams"]);
    assert_eq!(
        ids(form.available_employees(), |e| e.id.clone()),
        vec!["emp-1", "emp-2", "emp-4"]
    );
}

#[tokio::test]
async fn test_department_without_divisions_clears_division_and_assignee() {
    // Arrange
    let mut form = open_form().await;
    form.set_field(DraftEdit::Department("dep-water".into()));
    form.set_field(DraftEdit::Division("div-canals".into()));
    form.set_field(DraftEdit::AssignedTo("emp-1".into()));

    // Act
    let cleared = form.set_field(DraftEdit::Department("dep-empty".into()));

    // Assert
    assert_eq!(cleared, vec![DraftField::Division, DraftField::AssignedTo]);
    assert!(form.available_divisions().is_empty());
    assert!(form.draft().division.is_empty());
    assert!(form.draft().assigned_to.is_empty());
}

#[tokio::test]
async fn test_division_change_drops_assignee_outside_it() {
    let mut form = open_form().await;
    form.set_field(DraftEdit::Department("dep-water".into()));
    form.set_field(DraftEdit::AssignedTo("emp-1".into()));

    let cleared = form.set_field(DraftEdit::Division("div-dams".into()));

    assert_eq!(cleared, vec![DraftField::AssignedTo]);
    assert_eq!(ids(form.available_employees(), |e| e.id.clone()), vec!["emp-2"]);
}

#[tokio::test]
async fn test_assignee_must_be_in_available_employees() {
    let mut form = open_form().await;
    form.set_field(DraftEdit::Department("dep-admin".into()));

    let cleared = form.set_field(DraftEdit::AssignedTo("emp-1".into()));

    assert_eq!(cleared, vec![DraftField::AssignedTo]);
    assert!(form.draft().assigned_to.is_empty());
}

#[tokio::test]
async fn test_available_employees_is_filtered_subset() {
    let mut form = open_form().await;
    let everyone = organisation().employees;

    for (department, division) in
        [("", ""), ("dep-water", ""), ("dep-water", "div-dams"), ("dep-admin", "div-hr")]
    {
        form.set_field(DraftEdit::Department(department.into()));
        form.set_field(DraftEdit::Division(division.into()));

        for employee in form.available_employees() {
            assert!(everyone.contains(employee));
            assert!(department.is_empty() || employee.department == department);
            assert!(division.is_empty() || employee.division == division);
        }
    }
}

#[tokio::test]
async fn test_directory_failure_leaves_lists_empty() {
    let directory = MockDirectory::new(organisation());
    directory.fail(true);

    let mut form = OutgoingForm::new();
    form.initialize(None);
    form.load_references(&directory).await;

    assert!(!form.references_loaded());
    assert!(form.departments().is_empty());
    assert!(form.available_employees().is_empty());
}

// ============================================================================
// validate
// ============================================================================

#[tokio::test]
async fn test_validate_reports_each_blank_required_field() {
    let mut form = open_form().await;
    form.set_field(DraftEdit::Number(String::new()));
    form.set_field(DraftEdit::Recipient("  ".into()));

    assert!(!form.validate());

    let errors = form.errors();
    assert_eq!(errors.len(), 5);
    assert_eq!(errors.get(DraftField::Number), Some("Outgoing number is required"));
    assert_eq!(errors.get(DraftField::Recipient), Some("Recipient name is required"));
    assert_eq!(errors.get(DraftField::Subject), Some("Subject is required"));
    assert_eq!(errors.get(DraftField::Department), Some("Issuing department is required"));
    assert_eq!(errors.get(DraftField::AssignedTo), Some("Preparing employee is required"));
}

#[tokio::test]
async fn test_validate_passes_without_division() {
    let mut form = open_form().await;
    fill_required(&mut form);
    form.set_field(DraftEdit::Division(String::new()));
    form.set_field(DraftEdit::AssignedTo("emp-4".into()));

    assert!(form.validate());
    assert!(form.errors().is_empty());
}

#[tokio::test]
async fn test_validate_replaces_previous_errors() {
    let mut form = open_form().await;
    form.validate();
    fill_required(&mut form);
    form.set_field(DraftEdit::Subject(String::new()));

    assert!(!form.validate());

    let fields: Vec<_> = form.errors().fields().collect();
    assert_eq!(fields, vec![DraftField::Subject]);
}

// ============================================================================
// submit / cancel
// ============================================================================

#[tokio::test]
async fn test_invalid_submit_never_reaches_store() {
    let store = MockCorrespondenceStore::default();
    let mut form = open_form().await;

    let outcome = form.submit(&store).await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Rejected(ref errors) if errors.len() == 4));
    assert_eq!(store.attempts(), 0);
    assert!(form.is_open());
    assert!(form.errors().contains(DraftField::Recipient));
}

#[tokio::test]
async fn test_valid_submit_persists_and_closes() {
    let store = MockCorrespondenceStore::default();
    let mut form = open_form().await;
    fill_required(&mut form);

    let outcome = form.submit(&store).await.unwrap();

    let SubmitOutcome::Saved(saved) = outcome else { panic!("expected saved outcome") };
    assert_eq!(store.saved(), vec![saved.clone()]);
    assert_eq!(saved.assigned_to, "emp-1");
    assert_eq!(form.state(), FormState::Closed);
}

#[tokio::test]
async fn test_failed_persist_keeps_draft_and_unrelated_errors() {
    // Arrange - a prior pass left an error that the user then fixed
    let store = MockCorrespondenceStore::failing();
    let mut form = open_form().await;
    form.validate();
    fill_required(&mut form);
    form.set_field(DraftEdit::Number("OUT-2025-000001".into()));
    let before = form.draft().clone();

    // Act
    let result = form.submit(&store).await;

    // Assert
    assert!(result.is_err());
    assert_eq!(store.attempts(), 1);
    assert_eq!(form.draft(), &before);
    assert_eq!(form.errors(), &ValidationErrors::new());
    assert!(form.is_open());
}

#[tokio::test]
async fn test_failed_persist_is_retryable() {
    let store = MockCorrespondenceStore::failing();
    let mut form = open_form().await;
    fill_required(&mut form);

    assert!(form.submit(&store).await.is_err());
    store.fail(false);
    let outcome = form.submit(&store).await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Saved(_)));
    assert_eq!(store.attempts(), 2);
    assert_eq!(store.saved().len(), 1);
}

#[tokio::test]
async fn test_cancel_closes_and_blocks_submit() {
    let store = MockCorrespondenceStore::default();
    let mut form = open_form().await;
    fill_required(&mut form);

    form.cancel();

    assert_eq!(form.state(), FormState::Closed);
    assert!(form.submit(&store).await.is_err());
    assert_eq!(store.attempts(), 0);
}
