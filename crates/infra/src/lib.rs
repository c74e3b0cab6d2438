//! # Diwan Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Configuration loading (environment variables, JSON/TOML files)
//! - In-memory directory, correspondence and notification adapters
//! - JSON seed snapshots for the in-memory adapters
//! - The filesystem folder store
//!
//! ## Architecture
//! - Implements traits defined in `diwan-core`
//! - Contains all "impure" code (filesystem, environment)

pub mod config;
pub mod files;
pub mod memory;
pub mod seed;

pub use files::JsonFolderStore;
pub use memory::{InMemoryCorrespondenceStore, InMemoryDirectory, InMemoryNotificationStore};
pub use seed::SeedData;
