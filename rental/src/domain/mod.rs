//! Domain layer
//!
//! Contains pure business logic with no storage dependencies.
//! - `entities`: value records for cars, customers and leases
//! - `ports`: trait definitions for storage and the calendar

pub mod entities;
pub mod ports;
