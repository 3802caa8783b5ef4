//! Car rental
//!
//! Connects to PostgreSQL, makes sure the tables exist, optionally loads the
//! sample fleet and logs which cars are out today.

use std::sync::Arc;

use anyhow::Context;
use sea_orm::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use car_rental::adapters::{
    ensure_schema, PostgresCarRepository, PostgresCustomerRepository, PostgresLeaseRepository,
    SystemClock,
};
use car_rental::app::{load_sample_data, CarService, CustomerService, LeaseService};
use car_rental::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,car_rental=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting car rental...");

    let config = Config::from_env()?;

    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    ensure_schema(&db).await.context("Failed to create schema")?;

    let car_repo = Arc::new(PostgresCarRepository::new(db.clone()));
    let customer_repo = Arc::new(PostgresCustomerRepository::new(db.clone()));
    let lease_repo = Arc::new(PostgresLeaseRepository::new(db));
    let clock = Arc::new(SystemClock);

    let car_service = CarService::new(car_repo.clone());
    let customer_service = CustomerService::new(customer_repo.clone());
    let lease_service = LeaseService::new(lease_repo, car_repo, customer_repo, clock)
        .with_overlap_policy(config.overlap_policy);
    tracing::info!(overlap_policy = %lease_service.overlap_policy(), "Services ready");

    if config.seed_sample_data {
        load_sample_data(&car_service, &customer_service, &lease_service)
            .await
            .context("Failed to load sample data")?;
    }

    let availability = lease_service.availability().await?;
    for car in &availability.leased {
        tracing::info!(car_id = %car.id, brand = %car.brand, "Leased");
    }
    for car in &availability.unleased {
        tracing::info!(car_id = %car.id, brand = %car.brand, "Available");
    }
    tracing::info!(
        date = %availability.date,
        leased = availability.leased.len(),
        available = availability.unleased.len(),
        customers = customer_service.find_all().await?.len(),
        "Fleet status"
    );

    Ok(())
}
