//! Outgoing correspondence form coordinator
//!
//! Owns one draft, its per-field validation messages and the reference lists
//! the select inputs are built from. Every mutating call recomputes the
//! derived lists explicitly and applies the cascade clears it reports.

use chrono::{DateTime, Utc};
use diwan_domain::{
    CorrespondenceDraft, Department, DiwanError, DraftEdit, DraftField, Division, Employee,
    ReferenceData, Result, ValidationErrors,
};
use tracing::{debug, error, info};

use super::cascade::{self, Cascade};
use super::ports::CorrespondenceStore;
use crate::directory::{fetch_reference_data, DirectoryProvider};

/// Lifecycle of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Draft is being edited
    Open,
    /// Draft was saved or discarded
    Closed,
}

/// Result of a submit attempt that did not hit a persistence failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft was persisted; the form is now closed
    Saved(CorrespondenceDraft),
    /// Draft failed validation; nothing was persisted
    Rejected(ValidationErrors),
}

/// Coordinator for the outgoing correspondence form
#[derive(Debug)]
pub struct OutgoingForm {
    draft: CorrespondenceDraft,
    errors: ValidationErrors,
    references: ReferenceData,
    references_loaded: bool,
    available_divisions: Vec<Division>,
    available_employees: Vec<Employee>,
    state: FormState,
}

impl Default for OutgoingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl OutgoingForm {
    /// Create a closed form; call [`initialize`](Self::initialize) to open it
    pub fn new() -> Self {
        Self {
            draft: CorrespondenceDraft::new_outgoing(Utc::now()),
            errors: ValidationErrors::new(),
            references: ReferenceData::default(),
            references_loaded: false,
            available_divisions: Vec::new(),
            available_employees: Vec::new(),
            state: FormState::Closed,
        }
    }

    /// Open the form on `existing`, or on a fresh draft when `None`
    pub fn initialize(&mut self, existing: Option<CorrespondenceDraft>) {
        self.initialize_at(existing, Utc::now());
    }

    /// [`initialize`](Self::initialize) with an explicit clock for the fresh
    /// draft's number and date
    pub fn initialize_at(&mut self, existing: Option<CorrespondenceDraft>, now: DateTime<Utc>) {
        self.draft = match existing {
            Some(draft) => {
                debug!(number = %draft.number, "opening existing outgoing correspondence");
                draft
            }
            None => {
                let draft = CorrespondenceDraft::new_outgoing(now);
                debug!(number = %draft.number, "opening new outgoing correspondence");
                draft
            }
        };
        self.errors = ValidationErrors::new();
        self.state = FormState::Open;
        self.recompute();
    }

    /// Load employees, departments and divisions through the directory.
    ///
    /// A failure is logged and leaves the reference lists as they were.
    pub async fn load_references<D>(&mut self, directory: &D)
    where
        D: DirectoryProvider + ?Sized,
    {
        match fetch_reference_data(directory).await {
            Ok(references) => self.set_references(references),
            Err(err) => {
                error!(error = %err, "failed to load reference data for outgoing form");
            }
        }
    }

    /// Replace the reference lists and recompute the cascade
    pub fn set_references(&mut self, references: ReferenceData) {
        self.references = references;
        self.references_loaded = true;
        self.recompute();
    }

    /// Replace one field's value.
    ///
    /// Clears that field's validation message only. Returns the dependent
    /// fields emptied by the cascade, if any.
    pub fn set_field(&mut self, edit: DraftEdit) -> Vec<DraftField> {
        let field = edit.field();
        self.draft.apply(edit);
        self.errors.remove(field);

        match field {
            DraftField::Department | DraftField::Division | DraftField::AssignedTo => {
                self.recompute()
            }
            _ => Vec::new(),
        }
    }

    /// Check required fields, replacing the whole error map.
    ///
    /// Returns `true` when the draft can be submitted. Division is optional.
    pub fn validate(&mut self) -> bool {
        let mut errors = ValidationErrors::new();
        for field in DraftField::REQUIRED {
            let blank = self.draft.text(field).map_or(true, |value| value.trim().is_empty());
            if let (true, Some(message)) = (blank, field.required_message()) {
                errors.insert(field, message);
            }
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Validate and hand the draft to `store`.
    ///
    /// An invalid draft is never persisted. A persistence failure is logged
    /// and returned; the draft, the error map and the open state are left as
    /// they were so the user can retry.
    ///
    /// # Errors
    /// `InvalidInput` if the form is not open, otherwise whatever `store`
    /// reports.
    pub async fn submit<S>(&mut self, store: &S) -> Result<SubmitOutcome>
    where
        S: CorrespondenceStore + ?Sized,
    {
        if self.state != FormState::Open {
            return Err(DiwanError::InvalidInput("outgoing form is not open".to_string()));
        }

        if !self.validate() {
            debug!(fields = ?self.errors.fields().collect::<Vec<_>>(), "outgoing draft rejected");
            return Ok(SubmitOutcome::Rejected(self.errors.clone()));
        }

        match store.save(&self.draft).await {
            Ok(()) => {
                info!(number = %self.draft.number, "outgoing correspondence saved");
                self.state = FormState::Closed;
                Ok(SubmitOutcome::Saved(self.draft.clone()))
            }
            Err(err) => {
                error!(number = %self.draft.number, error = %err, "failed to save outgoing correspondence");
                Err(err)
            }
        }
    }

    /// Discard the draft and close the form
    pub fn cancel(&mut self) {
        debug!(number = %self.draft.number, "outgoing draft discarded");
        self.errors = ValidationErrors::new();
        self.state = FormState::Closed;
    }

    /// Draft under edit
    pub const fn draft(&self) -> &CorrespondenceDraft {
        &self.draft
    }

    /// Messages from the last validation, minus fields edited since
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// All departments from the loaded reference data
    pub fn departments(&self) -> &[Department] {
        &self.references.departments
    }

    /// Divisions of the selected department
    pub fn available_divisions(&self) -> &[Division] {
        &self.available_divisions
    }

    /// Employees matching the selected department and division
    pub fn available_employees(&self) -> &[Employee] {
        &self.available_employees
    }

    /// Current lifecycle state
    pub const fn state(&self) -> FormState {
        self.state
    }

    /// Shorthand for `state() == FormState::Open`
    pub fn is_open(&self) -> bool {
        self.state == FormState::Open
    }

    /// Whether reference data has arrived at least once
    pub const fn references_loaded(&self) -> bool {
        self.references_loaded
    }

    /// Rebuild the select lists and apply stale-selection clears.
    ///
    /// Skipped until reference data has arrived so that an existing record
    /// keeps its division and assignee while the lists are still loading.
    fn recompute(&mut self) -> Vec<DraftField> {
        if !self.references_loaded {
            return Vec::new();
        }

        let Cascade { available_divisions, available_employees, cleared } =
            cascade::reconcile(&self.draft, &self.references);

        for field in &cleared {
            self.draft.clear(*field);
        }
        if !cleared.is_empty() {
            debug!(cleared = ?cleared, "cleared stale outgoing form selections");
        }

        self.available_divisions = available_divisions;
        self.available_employees = available_employees;
        cleared
    }
}
