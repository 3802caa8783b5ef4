//! Test utilities
//!
//! In-memory repository implementations and test fixtures for unit testing.
//!
//! The repositories are hand-written rather than generated with mockall: the
//! services need stores that actually keep what they are given, so a test can
//! create a car and then lease it. mockall is used for the clock only.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
