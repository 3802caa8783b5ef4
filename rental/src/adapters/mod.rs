//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod clock;
pub mod postgres;

pub use clock::SystemClock;
pub use postgres::{
    ensure_schema, PostgresCarRepository, PostgresCustomerRepository, PostgresLeaseRepository,
};
