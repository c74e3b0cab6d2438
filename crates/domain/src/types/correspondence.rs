//! Outgoing correspondence draft types
//!
//! A draft is created when the outgoing form opens, edited one field at a
//! time through [`DraftEdit`], validated into [`ValidationErrors`] and finally
//! handed to the persistence port.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::{OUTGOING_NUMBER_PREFIX, OUTGOING_NUMBER_SUFFIX_DIGITS};
use crate::impl_domain_status_conversions;
use crate::utils::dates::flexible_date;

/* -------------------------------------------------------------------------- */
/* Enumerations */
/* -------------------------------------------------------------------------- */

/// Confidentiality level of a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Confidentiality {
    #[default]
    Normal,
    Secret,
    TopSecret,
}

impl_domain_status_conversions!(Confidentiality {
    Normal => "normal",
    Secret => "secret",
    TopSecret => "top_secret",
});

/// Urgency level of a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    #[default]
    Normal,
    Urgent,
    Immediate,
}

impl_domain_status_conversions!(Urgency {
    Normal => "normal",
    Urgent => "urgent",
    Immediate => "immediate",
});

/// Lifecycle status of an outgoing letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum OutgoingStatus {
    #[default]
    Draft,
    UnderReview,
    PendingSignature,
    Issued,
    Archived,
}

impl_domain_status_conversions!(OutgoingStatus {
    Draft => "draft",
    UnderReview => "under_review",
    PendingSignature => "pending_signature",
    Issued => "issued",
    Archived => "archived",
});

/// How an outgoing letter leaves the authority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum DeliveryChannel {
    #[default]
    Mail,
    Courier,
    Email,
    Portal,
    Fax,
}

impl_domain_status_conversions!(DeliveryChannel {
    Mail => "mail",
    Courier => "courier",
    Email => "email",
    Portal => "portal",
    Fax => "fax",
});

/* -------------------------------------------------------------------------- */
/* Draft */
/* -------------------------------------------------------------------------- */

/// Outgoing correspondence under edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct CorrespondenceDraft {
    /// Storage id; `None` until the record has been persisted once
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub number: String,
    #[serde(with = "flexible_date")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub date: NaiveDate,
    #[serde(default)]
    pub recipient: String,
    #[serde(default)]
    pub recipient_organization: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub confidentiality: Confidentiality,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub status: OutgoingStatus,
    /// Issuing department id
    #[serde(default)]
    pub department: String,
    /// Division id; must belong to `department`
    #[serde(default)]
    pub division: String,
    /// Preparing employee id; must belong to `department` (and `division`)
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub delivery_channel: DeliveryChannel,
}

impl CorrespondenceDraft {
    /// Fresh draft with a generated number and default enumerations
    pub fn new_outgoing(now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            number: generate_outgoing_number(now),
            date: now.date_naive(),
            recipient: String::new(),
            recipient_organization: String::new(),
            subject: String::new(),
            confidentiality: Confidentiality::default(),
            urgency: Urgency::default(),
            status: OutgoingStatus::default(),
            department: String::new(),
            division: String::new(),
            assigned_to: String::new(),
            notes: String::new(),
            delivery_channel: DeliveryChannel::default(),
        }
    }

    /// Replace a single field with the edit's value
    pub fn apply(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::Number(value) => self.number = value,
            DraftEdit::Date(value) => self.date = value,
            DraftEdit::Recipient(value) => self.recipient = value,
            DraftEdit::RecipientOrganization(value) => self.recipient_organization = value,
            DraftEdit::Subject(value) => self.subject = value,
            DraftEdit::Confidentiality(value) => self.confidentiality = value,
            DraftEdit::Urgency(value) => self.urgency = value,
            DraftEdit::Status(value) => self.status = value,
            DraftEdit::Department(value) => self.department = value,
            DraftEdit::Division(value) => self.division = value,
            DraftEdit::AssignedTo(value) => self.assigned_to = value,
            DraftEdit::Notes(value) => self.notes = value,
            DraftEdit::DeliveryChannel(value) => self.delivery_channel = value,
        }
    }

    /// Empty a text field; enumerated fields and the date are left untouched
    pub fn clear(&mut self, field: DraftField) {
        match field {
            DraftField::Number => self.number.clear(),
            DraftField::Recipient => self.recipient.clear(),
            DraftField::RecipientOrganization => self.recipient_organization.clear(),
            DraftField::Subject => self.subject.clear(),
            DraftField::Department => self.department.clear(),
            DraftField::Division => self.division.clear(),
            DraftField::AssignedTo => self.assigned_to.clear(),
            DraftField::Notes => self.notes.clear(),
            DraftField::Date
            | DraftField::Confidentiality
            | DraftField::Urgency
            | DraftField::Status
            | DraftField::DeliveryChannel => {}
        }
    }

    /// Text value of a field when it is a free-text or reference field
    pub fn text(&self, field: DraftField) -> Option<&str> {
        match field {
            DraftField::Number => Some(&self.number),
            DraftField::Recipient => Some(&self.recipient),
            DraftField::RecipientOrganization => Some(&self.recipient_organization),
            DraftField::Subject => Some(&self.subject),
            DraftField::Department => Some(&self.department),
            DraftField::Division => Some(&self.division),
            DraftField::AssignedTo => Some(&self.assigned_to),
            DraftField::Notes => Some(&self.notes),
            DraftField::Date
            | DraftField::Confidentiality
            | DraftField::Urgency
            | DraftField::Status
            | DraftField::DeliveryChannel => None,
        }
    }
}

/// `OUT-<year>-<last six digits of the millisecond clock>`
pub fn generate_outgoing_number(now: DateTime<Utc>) -> String {
    let modulus = 10_i64.pow(OUTGOING_NUMBER_SUFFIX_DIGITS);
    let suffix = now.timestamp_millis().rem_euclid(modulus);
    format!(
        "{OUTGOING_NUMBER_PREFIX}-{}-{suffix:0width$}",
        now.year(),
        width = OUTGOING_NUMBER_SUFFIX_DIGITS as usize
    )
}

/* -------------------------------------------------------------------------- */
/* Field tags and edits */
/* -------------------------------------------------------------------------- */

/// Tag for each editable draft field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Number,
    Date,
    Recipient,
    RecipientOrganization,
    Subject,
    Confidentiality,
    Urgency,
    Status,
    Department,
    Division,
    AssignedTo,
    Notes,
    DeliveryChannel,
}

// Same camelCase names as serde
impl_domain_status_conversions!(DraftField {
    Number => "number",
    Date => "date",
    Recipient => "recipient",
    RecipientOrganization => "recipientOrganization",
    Subject => "subject",
    Confidentiality => "confidentiality",
    Urgency => "urgency",
    Status => "status",
    Department => "department",
    Division => "division",
    AssignedTo => "assignedTo",
    Notes => "notes",
    DeliveryChannel => "deliveryChannel",
});

impl DraftField {
    /// Fields that must be non-blank before a draft can be submitted
    pub const REQUIRED: [Self; 5] =
        [Self::Number, Self::Recipient, Self::Subject, Self::Department, Self::AssignedTo];

    /// Message shown when a required field is blank
    pub const fn required_message(self) -> Option<&'static str> {
        match self {
            Self::Number => Some("Outgoing number is required"),
            Self::Recipient => Some("Recipient name is required"),
            Self::Subject => Some("Subject is required"),
            Self::Department => Some("Issuing department is required"),
            Self::AssignedTo => Some("Preparing employee is required"),
            _ => None,
        }
    }
}

/// A single typed field edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Number(String),
    Date(NaiveDate),
    Recipient(String),
    RecipientOrganization(String),
    Subject(String),
    Confidentiality(Confidentiality),
    Urgency(Urgency),
    Status(OutgoingStatus),
    Department(String),
    Division(String),
    AssignedTo(String),
    Notes(String),
    DeliveryChannel(DeliveryChannel),
}

impl DraftEdit {
    /// The field this edit replaces
    pub const fn field(&self) -> DraftField {
        match self {
            Self::Number(_) => DraftField::Number,
            Self::Date(_) => DraftField::Date,
            Self::Recipient(_) => DraftField::Recipient,
            Self::RecipientOrganization(_) => DraftField::RecipientOrganization,
            Self::Subject(_) => DraftField::Subject,
            Self::Confidentiality(_) => DraftField::Confidentiality,
            Self::Urgency(_) => DraftField::Urgency,
            Self::Status(_) => DraftField::Status,
            Self::Department(_) => DraftField::Department,
            Self::Division(_) => DraftField::Division,
            Self::AssignedTo(_) => DraftField::AssignedTo,
            Self::Notes(_) => DraftField::Notes,
            Self::DeliveryChannel(_) => DraftField::DeliveryChannel,
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Validation errors */
/* -------------------------------------------------------------------------- */

/// Field-scoped validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<DraftField, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: DraftField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Remove the message for `field`, returning whether one was present
    pub fn remove(&mut self, field: DraftField) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: DraftField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Fields with an error, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = DraftField> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}
