//! # Diwan Domain
//!
//! Business domain types for the Diwan office-management backend.
//!
//! This crate contains:
//! - Directory reference data (employees, departments, divisions, tasks)
//! - Outgoing correspondence drafts, field tags and validation errors
//! - Notifications and leaderboard output types
//! - The domain error type, configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other Diwan crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::{format_file_size, parse_calendar_date};
