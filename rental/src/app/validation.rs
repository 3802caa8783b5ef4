//! Field rules shared by the managers
//!
//! Every helper logs the rejection at `warn` before returning the error so
//! that callers only need to surface the message.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::error::DomainError;

static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("phone number pattern is valid"));

/// Reject an absent top-level argument
pub fn require_argument<T>(value: Option<T>, what: &str) -> Result<T, DomainError> {
    value.ok_or_else(|| {
        tracing::warn!(argument = what, "Missing argument");
        DomainError::InvalidArgument(format!("{} can't be absent", what))
    })
}

/// Reject an entity whose id is absent where a persisted one is needed
pub fn require_id<T>(id: Option<T>, entity: &str) -> Result<T, DomainError> {
    id.ok_or_else(|| {
        tracing::warn!(entity, "Missing id");
        DomainError::NotFound(format!("{} has no id", entity))
    })
}

/// Reject an entity that already carries an id
pub fn require_transient<T: std::fmt::Display>(id: Option<T>, entity: &str) -> Result<(), DomainError> {
    match id {
        Some(id) => {
            tracing::warn!(entity, id = %id, "Entity already exists");
            Err(DomainError::AlreadyExists(format!(
                "{} already has id {}",
                entity, id
            )))
        }
        None => Ok(()),
    }
}

/// Reject a draft with a missing field
pub fn require_field<T: Clone>(value: &Option<T>, field: &str) -> Result<T, DomainError> {
    value.clone().ok_or_else(|| {
        tracing::warn!(field, "Missing property");
        DomainError::Validation(format!("{} is missing", field))
    })
}

pub fn require_non_empty(value: &str, field: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        tracing::warn!(field, "Empty property");
        return Err(DomainError::Validation(format!("{} can't be empty", field)));
    }
    Ok(())
}

pub fn require_non_negative(value: Decimal, field: &str) -> Result<(), DomainError> {
    if value < Decimal::ZERO {
        tracing::warn!(field, %value, "Negative amount");
        return Err(DomainError::Validation(format!(
            "{} can't be lower than 0",
            field
        )));
    }
    Ok(())
}

/// Phone numbers are one or more ASCII digits
pub fn require_phone_number(value: &str) -> Result<(), DomainError> {
    if !PHONE_NUMBER.is_match(value) {
        tracing::warn!(phone_number = value, "Wrong format of phone number");
        return Err(DomainError::Validation(
            "Phone number must contain digits only".to_string(),
        ));
    }
    Ok(())
}
