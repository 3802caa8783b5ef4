//! Error taxonomy for the rental core
//!
//! Every manager operation reports failures through `DomainError`. The
//! variants map one-to-one onto the categories callers are expected to handle:
//! - `InvalidArgument`: a required argument was not supplied (caller bug)
//! - `Validation`: entity content breaks a field-level rule
//! - `AlreadyExists`: a transient operation got an entity that already has an id
//! - `NotFound`: an update or delete targeted an absent or unknown id
//! - `Conflict`: a lease overlaps another booking under the `Reject` policy
//! - `Database`: the storage backend failed

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}
