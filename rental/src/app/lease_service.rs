//! Lease service
//!
//! Validates lease drafts, resolves the cars and customers leases refer to,
//! and answers availability queries.
//!
//! A lease stores only the ids of its car and customer. The `Car` and
//! `Customer` inside a returned `Lease` are read back on every query and so
//! reflect their current stored state, while the lease price stays the one
//! agreed at creation.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::app::overlap::{find_conflict, OverlapPolicy};
use crate::app::validation::{
    require_argument, require_field, require_id, require_non_negative, require_transient,
};
use crate::domain::entities::{
    Car, CarDraft, CarId, Customer, CustomerDraft, CustomerId, Lease, LeaseDraft, LeaseId,
    LeasePeriod, LeaseRecord, NewLease,
};
use crate::domain::ports::{CarRepository, Clock, CustomerRepository, EntityLookup, LeaseRepository};
use crate::error::DomainError;

/// Cars split by whether a lease holds them on a given date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarAvailability {
    pub date: NaiveDate,
    pub leased: Vec<Car>,
    pub unleased: Vec<Car>,
}

/// Validated lease fields
struct LeaseFields {
    customer: Customer,
    car: Car,
    period: LeasePeriod,
    price: Decimal,
}

/// Service for managing leases
pub struct LeaseService<LR, CR, UR, CL>
where
    LR: LeaseRepository,
    CR: CarRepository,
    UR: CustomerRepository,
    CL: Clock,
{
    leases: Arc<LR>,
    cars: Arc<CR>,
    customers: Arc<UR>,
    clock: Arc<CL>,
    overlap: OverlapPolicy,
}

impl<LR, CR, UR, CL> LeaseService<LR, CR, UR, CL>
where
    LR: LeaseRepository,
    CR: CarRepository,
    UR: CustomerRepository,
    CL: Clock,
{
    pub fn new(leases: Arc<LR>, cars: Arc<CR>, customers: Arc<UR>, clock: Arc<CL>) -> Self {
        Self {
            leases,
            cars,
            customers,
            clock,
            overlap: OverlapPolicy::default(),
        }
    }

    pub fn with_overlap_policy(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn overlap_policy(&self) -> OverlapPolicy {
        self.overlap
    }

    /// Today according to the service's clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Store a new lease
    ///
    /// The car and customer are trusted to be persisted; only their ids are
    /// written.
    pub async fn create(&self, lease: Option<&LeaseDraft>) -> Result<Lease, DomainError> {
        tracing::debug!("Creating new lease");
        let lease = require_argument(lease, "Lease")?;

        let LeaseFields {
            customer,
            car,
            period,
            price,
        } = validate_fields(lease, |id| require_transient(id, "Lease"))?;

        self.check_overlap(car.id, &period, None).await?;

        let record = self
            .leases
            .create(&NewLease {
                car_id: car.id,
                customer_id: customer.id,
                period,
                price,
            })
            .await?;

        tracing::debug!(
            lease_id = %record.id,
            car_id = %car.id,
            customer_id = %customer.id,
            days = period.days(),
            "Lease created"
        );
        Ok(record.resolve(car, customer))
    }

    /// Find a lease by ID; `Ok(None)` when no such lease is stored
    pub async fn get_by_id(&self, id: Option<LeaseId>) -> Result<Option<Lease>, DomainError> {
        let id = require_argument(id, "Lease id")?;
        tracing::debug!(lease_id = %id, "Finding lease");

        match self.leases.find_by_id(id).await? {
            Some(record) => Ok(self.resolve_all(vec![record]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Lease>, DomainError> {
        tracing::debug!("Finding all leases");
        let records = self.leases.find_all().await?;
        self.resolve_all(records).await
    }

    /// Overwrite a stored lease with the draft's fields
    pub async fn update(&self, lease: Option<&LeaseDraft>) -> Result<Lease, DomainError> {
        tracing::debug!("Updating lease");
        let lease = require_argument(lease, "Lease")?;
        let id = require_id(lease.id, "Lease")?;

        let fields = validate_fields(lease, |_| Ok(()))?;
        self.check_overlap(fields.car.id, &fields.period, Some(id))
            .await?;

        let record = LeaseRecord {
            id,
            car_id: fields.car.id,
            customer_id: fields.customer.id,
            period: fields.period,
            price: fields.price,
        };
        self.leases.update(&record).await?;

        tracing::debug!(lease_id = %id, "Lease updated");
        Ok(record.resolve(fields.car, fields.customer))
    }

    pub async fn delete(&self, lease: Option<&LeaseDraft>) -> Result<(), DomainError> {
        tracing::debug!("Deleting lease");
        let lease = require_argument(lease, "Lease")?;
        let id = require_id(lease.id, "Lease")?;

        self.leases.delete(id).await?;

        tracing::debug!(lease_id = %id, "Lease deleted");
        Ok(())
    }

    /// Leases of a customer
    ///
    /// `Ok(None)` means the customer is not stored, as opposed to
    /// `Ok(Some(vec![]))` for a stored customer without leases.
    pub async fn find_leases_for_customer(
        &self,
        customer: Option<&CustomerDraft>,
    ) -> Result<Option<Vec<Lease>>, DomainError> {
        tracing::debug!("Finding all leases for customer");
        let customer = require_argument(customer, "Customer")?;
        let id: CustomerId = require_id(customer.id, "Customer")?;

        if !self.customers.exists_by_id(id).await? {
            tracing::debug!(customer_id = %id, "Customer does not exist");
            return Ok(None);
        }

        let records = self.leases.find_by_customer(id).await?;
        Ok(Some(self.resolve_all(records).await?))
    }

    /// Leases of a car; `Ok(None)` when the car is not stored
    pub async fn find_leases_for_car(
        &self,
        car: Option<&CarDraft>,
    ) -> Result<Option<Vec<Lease>>, DomainError> {
        tracing::debug!("Finding all leases for car");
        let car = require_argument(car, "Car")?;
        let id: CarId = require_id(car.id, "Car")?;

        if !self.cars.exists_by_id(id).await? {
            tracing::debug!(car_id = %id, "Car does not exist");
            return Ok(None);
        }

        let records = self.leases.find_by_car(id).await?;
        Ok(Some(self.resolve_all(records).await?))
    }

    /// Cars no lease holds today
    pub async fn find_unleased_cars(&self) -> Result<Vec<Car>, DomainError> {
        self.find_unleased_cars_on(self.today()).await
    }

    /// Cars some lease holds today
    pub async fn find_leased_cars(&self) -> Result<Vec<Car>, DomainError> {
        self.find_leased_cars_on(self.today()).await
    }

    /// Today's leased/unleased split
    pub async fn availability(&self) -> Result<CarAvailability, DomainError> {
        self.availability_on(self.today()).await
    }

    pub async fn find_unleased_cars_on(&self, date: NaiveDate) -> Result<Vec<Car>, DomainError> {
        Ok(self.availability_on(date).await?.unleased)
    }

    pub async fn find_leased_cars_on(&self, date: NaiveDate) -> Result<Vec<Car>, DomainError> {
        Ok(self.availability_on(date).await?.leased)
    }

    /// Partition every stored car by whether a lease holds it on `date`
    ///
    /// Both halves come from one read of the car table, so together they are
    /// exactly the stored cars and never share a car.
    pub async fn availability_on(&self, date: NaiveDate) -> Result<CarAvailability, DomainError> {
        let cars = self.cars.find_all().await?;
        let leased_ids: HashSet<CarId> = self
            .leases
            .find_car_ids_leased_on(date)
            .await?
            .into_iter()
            .collect();

        let (leased, unleased): (Vec<Car>, Vec<Car>) = cars
            .into_iter()
            .partition(|car| leased_ids.contains(&car.id));

        tracing::debug!(
            %date,
            leased = leased.len(),
            unleased = unleased.len(),
            "Computed car availability"
        );
        Ok(CarAvailability {
            date,
            leased,
            unleased,
        })
    }

    async fn check_overlap(
        &self,
        car_id: CarId,
        period: &LeasePeriod,
        exclude: Option<LeaseId>,
    ) -> Result<(), DomainError> {
        if self.overlap == OverlapPolicy::Allow {
            return Ok(());
        }

        let existing = self.leases.find_by_car(car_id).await?;
        if let Some(conflict) = find_conflict(period, &existing, exclude) {
            tracing::warn!(
                car_id = %car_id,
                conflicting_lease = %conflict.id,
                "Lease overlaps an existing booking"
            );
            return Err(DomainError::Conflict(format!(
                "Car {} is already leased from {} to {} (lease {})",
                car_id,
                conflict.period.start(),
                conflict.period.end(),
                conflict.id
            )));
        }
        Ok(())
    }

    /// Attach current car and customer snapshots to stored rows
    async fn resolve_all(&self, records: Vec<LeaseRecord>) -> Result<Vec<Lease>, DomainError> {
        let mut cars: HashMap<CarId, Car> = HashMap::new();
        let mut customers: HashMap<CustomerId, Customer> = HashMap::new();
        let mut leases = Vec::with_capacity(records.len());

        for record in records {
            let car = match cars.get(&record.car_id) {
                Some(car) => car.clone(),
                None => {
                    let car = lookup(self.cars.as_ref(), record.car_id, record.id, "Car").await?;
                    cars.insert(car.id, car.clone());
                    car
                }
            };
            let customer = match customers.get(&record.customer_id) {
                Some(customer) => customer.clone(),
                None => {
                    let customer = lookup(
                        self.customers.as_ref(),
                        record.customer_id,
                        record.id,
                        "Customer",
                    )
                    .await?;
                    customers.insert(customer.id, customer.clone());
                    customer
                }
            };

            leases.push(record.resolve(car, customer));
        }

        Ok(leases)
    }
}

/// Look up an entity a stored lease points at
///
/// A missing row means the reference dangles, which the store's foreign
/// keys normally prevent.
async fn lookup<L: EntityLookup + ?Sized>(
    entities: &L,
    id: L::Id,
    lease_id: LeaseId,
    kind: &str,
) -> Result<L::Entity, DomainError> {
    entities.find_by_id(id).await?.ok_or_else(|| {
        tracing::error!(lease_id = %lease_id, referenced = %id, kind, "Dangling lease reference");
        DomainError::NotFound(format!("{} {} referenced by lease {}", kind, id, lease_id))
    })
}

/// Field checks shared by create and update
///
/// Presence first, then the price, then `check_id`, then the date order.
fn validate_fields(
    lease: &LeaseDraft,
    check_id: impl FnOnce(Option<LeaseId>) -> Result<(), DomainError>,
) -> Result<LeaseFields, DomainError> {
    let customer = require_field(&lease.customer, "Customer")?;
    let car = require_field(&lease.car, "Leased car")?;
    let price = require_field(&lease.price, "Price")?;
    let start = require_field(&lease.start, "Start date")?;
    let end = require_field(&lease.end, "End date")?;
    require_non_negative(price, "Price")?;
    check_id(lease.id)?;
    let period = LeasePeriod::new(start, end)?;

    Ok(LeaseFields {
        customer,
        car,
        period,
        price,
    })
}
