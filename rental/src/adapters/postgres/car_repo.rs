//! PostgreSQL adapter for CarRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use super::update_error;
use crate::domain::entities::{Car, CarId, NewCar};
use crate::domain::ports::{CarRepository, EntityLookup};
use crate::entity::cars;
use crate::error::DomainError;

/// PostgreSQL implementation of CarRepository
pub struct PostgresCarRepository {
    db: DatabaseConnection,
}

impl PostgresCarRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityLookup for PostgresCarRepository {
    type Id = CarId;
    type Entity = Car;

    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, DomainError> {
        let result = cars::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn exists_by_id(&self, id: CarId) -> Result<bool, DomainError> {
        let count = cars::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }
}

#[async_trait]
impl CarRepository for PostgresCarRepository {
    async fn create(&self, car: &NewCar) -> Result<Car, DomainError> {
        let model = cars::ActiveModel {
            car_brand: Set(car.brand.clone()),
            description: Set(car.description.clone()),
            daily_price: Set(car.daily_price),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn find_all(&self) -> Result<Vec<Car>, DomainError> {
        let results = cars::Entity::find()
            .order_by_asc(cars::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, car: &Car) -> Result<(), DomainError> {
        cars::ActiveModel {
            id: Set(car.id.0),
            car_brand: Set(car.brand.clone()),
            description: Set(car.description.clone()),
            daily_price: Set(car.daily_price),
        }
        .update(&self.db)
        .await
        .map_err(|e| update_error(e, format!("Car {}", car.id)))?;

        Ok(())
    }

    async fn delete(&self, id: CarId) -> Result<(), DomainError> {
        let result = cars::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Car {}", id)));
        }
        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<cars::Model> for Car {
    fn from(model: cars::Model) -> Self {
        Car {
            id: CarId(model.id),
            brand: model.car_brand,
            description: model.description,
            daily_price: model.daily_price,
        }
    }
}
