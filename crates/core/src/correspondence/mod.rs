//! Outgoing correspondence form

pub mod cascade;
pub mod form;
pub mod ports;

pub use cascade::{assignable_employees, divisions_for_department, reconcile, Cascade};
pub use form::{FormState, OutgoingForm, SubmitOutcome};
pub use ports::CorrespondenceStore;
