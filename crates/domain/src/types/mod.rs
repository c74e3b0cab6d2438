//! Domain types and models

pub mod correspondence;
pub mod directory;
pub mod files;
pub mod notification;
pub mod ranking;

// Re-export for convenience
pub use correspondence::{
    generate_outgoing_number, Confidentiality, CorrespondenceDraft, DeliveryChannel, DraftEdit,
    DraftField, OutgoingStatus, Urgency, ValidationErrors,
};
pub use directory::{
    Department, Division, Employee, EmployeeStatus, ReferenceData, Task, TaskPriority, TaskStatus,
};
pub use files::StoredFile;
pub use notification::{
    Notification, NotificationKind, NotificationPriority, RelatedEntity, RelatedEntityKind,
};
pub use ranking::{Leaderboard, ProgressBar, RankTier, RankedPerformer, RankingSummary, Trend};
