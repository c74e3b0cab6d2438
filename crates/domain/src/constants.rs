//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Outgoing correspondence numbering
pub const OUTGOING_NUMBER_PREFIX: &str = "OUT";
pub const OUTGOING_NUMBER_SUFFIX_DIGITS: u32 = 6;

// Leaderboard
pub const TOP_PERFORMERS_LIMIT: usize = 5;
pub const PROGRESS_POINTS_CEILING: f64 = 1000.0;
/// Placeholder per-employee average completion time (days) until task
/// timestamps feed a real metric.
pub const PLACEHOLDER_AVERAGE_TIME_DAYS: f64 = 2.5;

// Folder store
pub const SYSTEM_FOLDERS: [&str; 8] =
    ["exports", "imports", "attachments", "backups", "reports", "templates", "logs", "temp"];
pub const FILE_SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
pub const STORED_FILE_EXTENSION: &str = "json";

// Configuration defaults
pub const DEFAULT_DATA_DIR: &str = "diwan-data";
pub const DEFAULT_LOG_LEVEL: &str = "info";
