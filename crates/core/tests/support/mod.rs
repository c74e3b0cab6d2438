//! Shared test helpers for `diwan-core` integration tests.
//!
//! In-memory port mocks plus fixture builders, so each test file can focus on
//! behaviour instead of boilerplate.
#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;
