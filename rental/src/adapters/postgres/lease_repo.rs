//! PostgreSQL adapter for LeaseRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use super::update_error;
use crate::domain::entities::{
    CarId, CustomerId, LeaseId, LeasePeriod, LeaseRecord, NewLease,
};
use crate::domain::ports::LeaseRepository;
use crate::entity::leases;
use crate::error::DomainError;

/// PostgreSQL implementation of LeaseRepository
pub struct PostgresLeaseRepository {
    db: DatabaseConnection,
}

impl PostgresLeaseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_where<F>(&self, filter: F) -> Result<Vec<LeaseRecord>, DomainError>
    where
        F: sea_orm::sea_query::IntoCondition + Send,
    {
        let results = leases::Entity::find()
            .filter(filter)
            .order_by_asc(leases::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(LeaseRecord::try_from).collect()
    }
}

#[async_trait]
impl LeaseRepository for PostgresLeaseRepository {
    async fn create(&self, lease: &NewLease) -> Result<LeaseRecord, DomainError> {
        let model = leases::ActiveModel {
            leased_car_id: Set(lease.car_id.0),
            customer_id: Set(lease.customer_id.0),
            start_date: Set(lease.period.start()),
            end_date: Set(lease.period.end()),
            price: Set(lease.price),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        LeaseRecord::try_from(result)
    }

    async fn find_by_id(&self, id: LeaseId) -> Result<Option<LeaseRecord>, DomainError> {
        let result = leases::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(LeaseRecord::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<LeaseRecord>, DomainError> {
        let results = leases::Entity::find()
            .order_by_asc(leases::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(LeaseRecord::try_from).collect()
    }

    async fn find_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<LeaseRecord>, DomainError> {
        self.find_where(leases::Column::CustomerId.eq(customer_id.0))
            .await
    }

    async fn find_by_car(&self, car_id: CarId) -> Result<Vec<LeaseRecord>, DomainError> {
        self.find_where(leases::Column::LeasedCarId.eq(car_id.0))
            .await
    }

    async fn find_car_ids_leased_on(&self, date: NaiveDate) -> Result<Vec<CarId>, DomainError> {
        let ids: Vec<i64> = leases::Entity::find()
            .select_only()
            .column(leases::Column::LeasedCarId)
            .filter(leases::Column::StartDate.lte(date))
            .filter(leases::Column::EndDate.gt(date))
            .distinct()
            .order_by_asc(leases::Column::LeasedCarId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(ids.into_iter().map(CarId).collect())
    }

    async fn update(&self, lease: &LeaseRecord) -> Result<(), DomainError> {
        leases::ActiveModel {
            id: Set(lease.id.0),
            leased_car_id: Set(lease.car_id.0),
            customer_id: Set(lease.customer_id.0),
            start_date: Set(lease.period.start()),
            end_date: Set(lease.period.end()),
            price: Set(lease.price),
        }
        .update(&self.db)
        .await
        .map_err(|e| update_error(e, format!("Lease {}", lease.id)))?;

        Ok(())
    }

    async fn delete(&self, id: LeaseId) -> Result<(), DomainError> {
        let result = leases::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Lease {}", id)));
        }
        Ok(())
    }
}

/// Convert SeaORM model to a lease row; a stored period ending before it
/// starts is reported as a database error
impl TryFrom<leases::Model> for LeaseRecord {
    type Error = DomainError;

    fn try_from(model: leases::Model) -> Result<Self, Self::Error> {
        let period = LeasePeriod::new(model.start_date, model.end_date).map_err(|e| {
            DomainError::Database(format!("Lease {} has a corrupt period: {}", model.id, e))
        })?;

        Ok(LeaseRecord {
            id: LeaseId(model.id),
            car_id: CarId(model.leased_car_id),
            customer_id: CustomerId(model.customer_id),
            period,
            price: model.price,
        })
    }
}
