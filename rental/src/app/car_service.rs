//! Car service
//!
//! Validates car drafts and manages the fleet records.

use std::sync::Arc;

use crate::app::validation::{
    require_argument, require_field, require_id, require_non_empty, require_non_negative,
    require_transient,
};
use crate::domain::entities::{Car, CarDraft, CarId, NewCar};
use crate::domain::ports::{CarRepository, EntityLookup};
use crate::error::DomainError;

/// Service for managing cars
pub struct CarService<CR>
where
    CR: CarRepository,
{
    cars: Arc<CR>,
}

impl<CR> CarService<CR>
where
    CR: CarRepository,
{
    pub fn new(cars: Arc<CR>) -> Self {
        Self { cars }
    }

    /// Store a new car
    ///
    /// Brand, description and daily price must be present, the brand
    /// non-empty and the price not negative. A draft that already carries an
    /// id is rejected with `AlreadyExists`.
    pub async fn create(&self, car: Option<&CarDraft>) -> Result<Car, DomainError> {
        tracing::debug!("Creating car");
        let car = require_argument(car, "Car")?;

        let brand = require_field(&car.brand, "Car brand")?;
        let description = require_field(&car.description, "Description")?;
        let daily_price = require_field(&car.daily_price, "Daily price")?;
        require_transient(car.id, "Car")?;
        require_non_negative(daily_price, "Daily price")?;
        require_non_empty(&brand, "Car brand")?;

        let created = self
            .cars
            .create(&NewCar {
                brand,
                description,
                daily_price,
            })
            .await?;

        tracing::debug!(car_id = %created.id, "Car created");
        Ok(created)
    }

    /// Find a car by ID; `Ok(None)` when no such car is stored
    pub async fn get_by_id(&self, id: Option<CarId>) -> Result<Option<Car>, DomainError> {
        let id = require_argument(id, "Car id")?;
        tracing::debug!(car_id = %id, "Finding car");

        let car = self.cars.find_by_id(id).await?;
        if car.is_none() {
            tracing::debug!(car_id = %id, "Car not found");
        }
        Ok(car)
    }

    pub async fn find_all(&self) -> Result<Vec<Car>, DomainError> {
        tracing::debug!("Finding all cars");
        self.cars.find_all().await
    }

    /// Overwrite a stored car with the draft's fields
    ///
    /// All three fields must be present and the price not negative. Unlike
    /// create, an empty brand is stored as given.
    pub async fn update(&self, car: Option<&CarDraft>) -> Result<Car, DomainError> {
        tracing::debug!("Updating car");
        let car = require_argument(car, "Car")?;
        let id = require_id(car.id, "Car")?;

        let brand = require_field(&car.brand, "Car brand")?;
        let description = require_field(&car.description, "Description")?;
        let daily_price = require_field(&car.daily_price, "Daily price")?;
        require_non_negative(daily_price, "Daily price")?;

        let updated = Car {
            id,
            brand,
            description,
            daily_price,
        };
        self.cars.update(&updated).await?;

        tracing::debug!(car_id = %id, "Car updated");
        Ok(updated)
    }

    pub async fn delete(&self, car: Option<&CarDraft>) -> Result<(), DomainError> {
        tracing::debug!("Deleting car");
        let car = require_argument(car, "Car")?;
        let id = require_id(car.id, "Car")?;

        self.cars.delete(id).await?;

        tracing::debug!(car_id = %id, "Car deleted");
        Ok(())
    }
}
