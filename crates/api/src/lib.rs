//! # Diwan App
//!
//! Composition root - wiring and main entry point.
//!
//! This crate contains:
//! - Application context (dependency injection)
//! - Per-user sessions owning the notification feed
//! - Logging bootstrap
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod context;
pub mod utils;

pub use context::*;
