//! # Diwan Core
//!
//! Business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The outgoing correspondence form coordinator and its selection cascade
//! - The top performers ranking aggregator
//! - The per-user notification feed
//! - The named-folder document service
//!
//! ## Architecture Principles
//! - Only depends on `diwan-domain`
//! - No database, HTTP, or filesystem code
//! - All external collaborators via port traits

pub mod correspondence;
pub mod directory;
pub mod files;
pub mod notifications;
pub mod ranking;

pub use correspondence::{CorrespondenceStore, FormState, OutgoingForm, SubmitOutcome};
pub use directory::{fetch_reference_data, DirectoryProvider};
pub use files::{FolderService, FolderStore};
pub use notifications::{NotificationFeed, NotificationService};
pub use ranking::{rank_top_performers, PerformanceService};
