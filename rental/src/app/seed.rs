//! Sample data
//!
//! A small fleet, two customers and a few leases around `today`, for demos
//! and manual testing. Everything goes through the managers, so the sample
//! rows obey the same rules as user input.

use chrono::Duration;
use rust_decimal::Decimal;

use crate::app::{CarService, CustomerService, LeaseService};
use crate::domain::entities::{CarDraft, CustomerDraft, LeaseDraft};
use crate::domain::ports::{CarRepository, Clock, CustomerRepository, LeaseRepository};
use crate::error::DomainError;

/// What a seeding run inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub cars: usize,
    pub customers: usize,
    pub leases: usize,
}

/// Insert the sample rows unless the fleet already has cars
///
/// Lease dates are laid out around the lease service's today.
pub async fn load_sample_data<CR, UR, LR, CL>(
    cars: &CarService<CR>,
    customers: &CustomerService<UR>,
    leases: &LeaseService<LR, CR, UR, CL>,
) -> Result<SeedReport, DomainError>
where
    CR: CarRepository,
    UR: CustomerRepository,
    LR: LeaseRepository,
    CL: Clock,
{
    if !cars.find_all().await?.is_empty() {
        tracing::info!("Fleet already populated, skipping sample data");
        return Ok(SeedReport::default());
    }

    let today = leases.today();
    let bmw = cars
        .create(Some(&CarDraft::new("BMW", "I'm german.", Decimal::from(1350))))
        .await?;
    let aston = cars
        .create(Some(&CarDraft::new(
            "Aston Martin",
            "James Bond is my father!",
            Decimal::from(2000),
        )))
        .await?;
    let skoda = cars
        .create(Some(&CarDraft::new(
            "Skoda",
            "Octavia Combi, roomy and reliable",
            Decimal::new(4500, 2),
        )))
        .await?;

    let james = customers
        .create(Some(&CustomerDraft::new(
            "James Bond",
            "tajemna 762 10",
            "007007007",
        )))
        .await?;
    let eve = customers
        .create(Some(&CustomerDraft::new(
            "Eve Moneypenny",
            "Vauxhall Cross 85",
            "4402079",
        )))
        .await?;

    let sample_leases = [
        // Running now
        LeaseDraft::new(
            &james,
            &aston,
            today - Duration::days(3),
            today + Duration::days(2),
            Decimal::from(10000),
        ),
        // Returned yesterday
        LeaseDraft::new(
            &eve,
            &skoda,
            today - Duration::days(7),
            today - Duration::days(1),
            Decimal::from(270),
        ),
        // Booked for next week
        LeaseDraft::new(
            &eve,
            &bmw,
            today + Duration::days(7),
            today + Duration::days(9),
            Decimal::from(2700),
        ),
    ];
    for lease in &sample_leases {
        leases.create(Some(lease)).await?;
    }

    let report = SeedReport {
        cars: 3,
        customers: 2,
        leases: sample_leases.len(),
    };
    tracing::info!(
        cars = report.cars,
        customers = report.customers,
        leases = report.leases,
        "Sample data loaded"
    );
    Ok(report)
}
