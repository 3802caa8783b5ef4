//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Repositories store what they are given. Field rules live in the services;
//! a repository only reports `NotFound` when an update or delete matched no
//! row, and `Database` when the backend fails.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::{
    Car, CarId, Customer, CustomerId, LeaseId, LeaseRecord, NewCar, NewCustomer, NewLease,
};
use crate::error::DomainError;

/// Resolve an entity by its id
///
/// The lease manager depends only on this capability to check and resolve
/// the cars and customers a lease references, so each entity type can be
/// backed by a different store.
#[async_trait]
pub trait EntityLookup: Send + Sync {
    type Id: Copy + Send + Sync + std::fmt::Display + 'static;
    type Entity: Send;

    /// Find an entity by ID
    async fn find_by_id(&self, id: Self::Id) -> Result<Option<Self::Entity>, DomainError>;

    /// Check whether a row with this ID exists
    async fn exists_by_id(&self, id: Self::Id) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

/// Repository for Car entities
#[async_trait]
pub trait CarRepository: EntityLookup<Id = CarId, Entity = Car> {
    /// Insert a new car, returning it with its generated ID
    async fn create(&self, car: &NewCar) -> Result<Car, DomainError>;

    /// All cars ordered by ID
    async fn find_all(&self) -> Result<Vec<Car>, DomainError>;

    /// Overwrite brand, description and daily price
    async fn update(&self, car: &Car) -> Result<(), DomainError>;

    async fn delete(&self, id: CarId) -> Result<(), DomainError>;
}

/// Repository for Customer entities
#[async_trait]
pub trait CustomerRepository: EntityLookup<Id = CustomerId, Entity = Customer> {
    /// Insert a new customer, returning it with its generated ID
    async fn create(&self, customer: &NewCustomer) -> Result<Customer, DomainError>;

    /// All customers ordered by ID
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError>;

    /// Customers whose full name matches exactly
    async fn find_by_name(&self, full_name: &str) -> Result<Vec<Customer>, DomainError>;

    /// Overwrite full name, address and phone number
    async fn update(&self, customer: &Customer) -> Result<(), DomainError>;

    async fn delete(&self, id: CustomerId) -> Result<(), DomainError>;
}

/// Repository for lease rows
///
/// Leases are stored with car and customer IDs only; resolving them is the
/// service's job.
#[async_trait]
pub trait LeaseRepository: Send + Sync {
    /// Insert a new lease, returning the stored row
    async fn create(&self, lease: &NewLease) -> Result<LeaseRecord, DomainError>;

    /// Find a lease by ID
    async fn find_by_id(&self, id: LeaseId) -> Result<Option<LeaseRecord>, DomainError>;

    /// All leases ordered by ID
    async fn find_all(&self) -> Result<Vec<LeaseRecord>, DomainError>;

    /// Leases of one customer
    async fn find_by_customer(&self, customer_id: CustomerId)
        -> Result<Vec<LeaseRecord>, DomainError>;

    /// Leases of one car
    async fn find_by_car(&self, car_id: CarId) -> Result<Vec<LeaseRecord>, DomainError>;

    /// Distinct IDs of cars held by a lease on `date` (start <= date < end)
    async fn find_car_ids_leased_on(&self, date: NaiveDate) -> Result<Vec<CarId>, DomainError>;

    /// Overwrite car, customer, dates and price
    async fn update(&self, lease: &LeaseRecord) -> Result<(), DomainError>;

    async fn delete(&self, id: LeaseId) -> Result<(), DomainError>;
}
