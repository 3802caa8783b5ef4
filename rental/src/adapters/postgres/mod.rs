//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod car_repo;
pub mod customer_repo;
pub mod lease_repo;
pub mod schema;

#[cfg(test)]
mod integration_tests;

pub use car_repo::PostgresCarRepository;
pub use customer_repo::PostgresCustomerRepository;
pub use lease_repo::PostgresLeaseRepository;
pub use schema::ensure_schema;

use sea_orm::DbErr;

use crate::error::DomainError;

/// Map an `ActiveModel::update` failure; no matching row means `NotFound`
fn update_error(err: DbErr, target: String) -> DomainError {
    match err {
        DbErr::RecordNotUpdated => DomainError::NotFound(target),
        err => DomainError::Database(err.to_string()),
    }
}
