//! PostgreSQL adapter for CustomerRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::update_error;
use crate::domain::entities::{Customer, CustomerId, NewCustomer};
use crate::domain::ports::{CustomerRepository, EntityLookup};
use crate::entity::customers;
use crate::error::DomainError;

/// PostgreSQL implementation of CustomerRepository
pub struct PostgresCustomerRepository {
    db: DatabaseConnection,
}

impl PostgresCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityLookup for PostgresCustomerRepository {
    type Id = CustomerId;
    type Entity = Customer;

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError> {
        let result = customers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn exists_by_id(&self, id: CustomerId) -> Result<bool, DomainError> {
        let count = customers::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn create(&self, customer: &NewCustomer) -> Result<Customer, DomainError> {
        let model = customers::ActiveModel {
            full_name: Set(customer.full_name.clone()),
            address: Set(customer.address.clone()),
            phone_number: Set(customer.phone_number.clone()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        let results = customers::Entity::find()
            .order_by_asc(customers::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_name(&self, full_name: &str) -> Result<Vec<Customer>, DomainError> {
        let results = customers::Entity::find()
            .filter(customers::Column::FullName.eq(full_name))
            .order_by_asc(customers::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, customer: &Customer) -> Result<(), DomainError> {
        customers::ActiveModel {
            id: Set(customer.id.0),
            full_name: Set(customer.full_name.clone()),
            address: Set(customer.address.clone()),
            phone_number: Set(customer.phone_number.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| update_error(e, format!("Customer {}", customer.id)))?;

        Ok(())
    }

    async fn delete(&self, id: CustomerId) -> Result<(), DomainError> {
        let result = customers::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Customer {}", id)));
        }
        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<customers::Model> for Customer {
    fn from(model: customers::Model) -> Self {
        Customer {
            id: CustomerId(model.id),
            full_name: model.full_name,
            address: model.address,
            phone_number: model.phone_number,
        }
    }
}
