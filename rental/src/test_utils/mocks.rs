//! In-memory implementations of the repository ports
//!
//! Rows live in ordered maps keyed by ID, so listings come back in ID order
//! like they do from PostgreSQL. IDs are handed out from 1 upwards.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Car, CarId, Customer, CustomerId, LeaseId, LeaseRecord, NewCar, NewCustomer, NewLease,
};
use crate::domain::ports::{CarRepository, CustomerRepository, EntityLookup, LeaseRepository};
use crate::error::DomainError;

/// Sequence of generated IDs
#[derive(Default)]
struct IdSequence(AtomicI64);

impl IdSequence {
    fn next(&self) -> i64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

// ============================================================================
// In-Memory Car Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCarRepository {
    cars: Arc<RwLock<BTreeMap<CarId, Car>>>,
    ids: IdSequence,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityLookup for InMemoryCarRepository {
    type Id = CarId;
    type Entity = Car;

    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, DomainError> {
        let cars = self.cars.read().unwrap();
        Ok(cars.get(&id).cloned())
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn create(&self, car: &NewCar) -> Result<Car, DomainError> {
        let car = car.clone().with_id(CarId(self.ids.next()));
        let mut cars = self.cars.write().unwrap();
        cars.insert(car.id, car.clone());
        Ok(car)
    }

    async fn find_all(&self) -> Result<Vec<Car>, DomainError> {
        let cars = self.cars.read().unwrap();
        Ok(cars.values().cloned().collect())
    }

    async fn update(&self, car: &Car) -> Result<(), DomainError> {
        let mut cars = self.cars.write().unwrap();
        match cars.get_mut(&car.id) {
            Some(stored) => {
                *stored = car.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound(format!("Car {}", car.id))),
        }
    }

    async fn delete(&self, id: CarId) -> Result<(), DomainError> {
        let mut cars = self.cars.write().unwrap();
        cars.remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("Car {}", id)))
    }
}

// ============================================================================
// In-Memory Customer Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<BTreeMap<CustomerId, Customer>>>,
    ids: IdSequence,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityLookup for InMemoryCustomerRepository {
    type Id = CustomerId;
    type Entity = Customer;

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().unwrap();
        Ok(customers.get(&id).cloned())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, customer: &NewCustomer) -> Result<Customer, DomainError> {
        let customer = customer.clone().with_id(CustomerId(self.ids.next()));
        let mut customers = self.customers.write().unwrap();
        customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        let customers = self.customers.read().unwrap();
        Ok(customers.values().cloned().collect())
    }

    async fn find_by_name(&self, full_name: &str) -> Result<Vec<Customer>, DomainError> {
        let customers = self.customers.read().unwrap();
        Ok(customers
            .values()
            .filter(|c| c.full_name == full_name)
            .cloned()
            .collect())
    }

    async fn update(&self, customer: &Customer) -> Result<(), DomainError> {
        let mut customers = self.customers.write().unwrap();
        match customers.get_mut(&customer.id) {
            Some(stored) => {
                *stored = customer.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound(format!("Customer {}", customer.id))),
        }
    }

    async fn delete(&self, id: CustomerId) -> Result<(), DomainError> {
        let mut customers = self.customers.write().unwrap();
        customers
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("Customer {}", id)))
    }
}

// ============================================================================
// In-Memory Lease Repository
// ============================================================================

/// Lease rows only; no foreign key checks, so tests can leave dangling
/// references behind
#[derive(Default)]
pub struct InMemoryLeaseRepository {
    leases: Arc<RwLock<BTreeMap<LeaseId, LeaseRecord>>>,
    ids: IdSequence,
}

impl InMemoryLeaseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn filtered(&self, keep: impl Fn(&LeaseRecord) -> bool) -> Vec<LeaseRecord> {
        let leases = self.leases.read().unwrap();
        leases.values().filter(|l| keep(l)).cloned().collect()
    }
}

#[async_trait]
impl LeaseRepository for InMemoryLeaseRepository {
    async fn create(&self, lease: &NewLease) -> Result<LeaseRecord, DomainError> {
        let lease = lease.clone().with_id(LeaseId(self.ids.next()));
        let mut leases = self.leases.write().unwrap();
        leases.insert(lease.id, lease.clone());
        Ok(lease)
    }

    async fn find_by_id(&self, id: LeaseId) -> Result<Option<LeaseRecord>, DomainError> {
        let leases = self.leases.read().unwrap();
        Ok(leases.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<LeaseRecord>, DomainError> {
        Ok(self.filtered(|_| true))
    }

    async fn find_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<LeaseRecord>, DomainError> {
        Ok(self.filtered(|l| l.customer_id == customer_id))
    }

    async fn find_by_car(&self, car_id: CarId) -> Result<Vec<LeaseRecord>, DomainError> {
        Ok(self.filtered(|l| l.car_id == car_id))
    }

    async fn find_car_ids_leased_on(&self, date: NaiveDate) -> Result<Vec<CarId>, DomainError> {
        let ids: BTreeSet<CarId> = self
            .filtered(|l| l.period.is_active_on(date))
            .into_iter()
            .map(|l| l.car_id)
            .collect();
        Ok(ids.into_iter().collect())
    }

    async fn update(&self, lease: &LeaseRecord) -> Result<(), DomainError> {
        let mut leases = self.leases.write().unwrap();
        match leases.get_mut(&lease.id) {
            Some(stored) => {
                *stored = lease.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound(format!("Lease {}", lease.id))),
        }
    }

    async fn delete(&self, id: LeaseId) -> Result<(), DomainError> {
        let mut leases = self.leases.write().unwrap();
        leases
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("Lease {}", id)))
    }
}
