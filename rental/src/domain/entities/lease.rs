//! Lease domain entity
//!
//! A lease binds one customer to one car for a date period at a price agreed
//! when the lease is made. The store keeps only the car and customer ids;
//! reads resolve them back into current `Car`/`Customer` snapshots.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::car::{Car, CarId};
use super::customer::{Customer, CustomerId};
use crate::error::DomainError;

/// Store-generated identifier for a lease
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LeaseId(pub i64);

impl std::fmt::Display for LeaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dates a lease covers
///
/// `end` never precedes `start`. The car is in use on every day `d` with
/// `start <= d < end`, so a lease ending today no longer holds the car and a
/// same-day lease never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LeasePeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl LeasePeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::Validation(format!(
                "End of lease ({}) is before start ({})",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether the lease holds the car on `date`
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Whether two periods share at least one day of use
    pub fn overlaps(&self, other: &LeasePeriod) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// A lease that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLease {
    pub car_id: CarId,
    pub customer_id: CustomerId,
    pub period: LeasePeriod,
    pub price: Decimal,
}

impl NewLease {
    pub fn with_id(self, id: LeaseId) -> LeaseRecord {
        LeaseRecord {
            id,
            car_id: self.car_id,
            customer_id: self.customer_id,
            period: self.period,
            price: self.price,
        }
    }
}

/// A stored lease row, references unresolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaseRecord {
    pub id: LeaseId,
    pub car_id: CarId,
    pub customer_id: CustomerId,
    pub period: LeasePeriod,
    pub price: Decimal,
}

impl LeaseRecord {
    /// Combine the row with the car and customer it references
    pub fn resolve(self, car: Car, customer: Customer) -> Lease {
        Lease {
            id: self.id,
            customer,
            car,
            period: self.period,
            price: self.price,
        }
    }
}

/// A persisted lease with the current state of its car and customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lease {
    pub id: LeaseId,
    pub customer: Customer,
    pub car: Car,
    pub period: LeasePeriod,
    /// Agreed at creation, not derived from the car's daily price
    pub price: Decimal,
}

/// Unvalidated lease payload as assembled by a caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseDraft {
    pub id: Option<LeaseId>,
    pub customer: Option<Customer>,
    pub car: Option<Car>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub price: Option<Decimal>,
}

impl LeaseDraft {
    pub fn new(
        customer: &Customer,
        car: &Car,
        start: NaiveDate,
        end: NaiveDate,
        price: Decimal,
    ) -> Self {
        Self {
            id: None,
            customer: Some(customer.clone()),
            car: Some(car.clone()),
            start: Some(start),
            end: Some(end),
            price: Some(price),
        }
    }
}

impl From<&Lease> for LeaseDraft {
    fn from(lease: &Lease) -> Self {
        Self {
            id: Some(lease.id),
            customer: Some(lease.customer.clone()),
            car: Some(lease.car.clone()),
            start: Some(lease.period.start()),
            end: Some(lease.period.end()),
            price: Some(lease.price),
        }
    }
}
