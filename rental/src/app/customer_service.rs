//! Customer service
//!
//! Validates customer drafts and manages customer records.

use std::sync::Arc;

use crate::app::validation::{
    require_argument, require_field, require_id, require_non_empty, require_phone_number,
    require_transient,
};
use crate::domain::entities::{Customer, CustomerDraft, CustomerId, NewCustomer};
use crate::domain::ports::{CustomerRepository, EntityLookup};
use crate::error::DomainError;

/// Service for managing customers
pub struct CustomerService<CR>
where
    CR: CustomerRepository,
{
    customers: Arc<CR>,
}

/// Validated customer fields
struct CustomerFields {
    full_name: String,
    address: String,
    phone_number: String,
}

impl<CR> CustomerService<CR>
where
    CR: CustomerRepository,
{
    pub fn new(customers: Arc<CR>) -> Self {
        Self { customers }
    }

    /// Store a new customer
    pub async fn create(&self, customer: Option<&CustomerDraft>) -> Result<Customer, DomainError> {
        tracing::debug!("Creating customer");
        let customer = require_argument(customer, "Customer")?;

        let fields = validate_fields(customer, |id| require_transient(id, "Customer"))?;

        let created = self
            .customers
            .create(&NewCustomer {
                full_name: fields.full_name,
                address: fields.address,
                phone_number: fields.phone_number,
            })
            .await?;

        tracing::debug!(customer_id = %created.id, "Customer created");
        Ok(created)
    }

    /// Find a customer by ID; `Ok(None)` when no such customer is stored
    pub async fn get_by_id(&self, id: Option<CustomerId>) -> Result<Option<Customer>, DomainError> {
        let id = require_argument(id, "Customer id")?;
        tracing::debug!(customer_id = %id, "Finding customer");

        self.customers.find_by_id(id).await
    }

    pub async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        tracing::debug!("Finding all customers");
        self.customers.find_all().await
    }

    /// Customers whose full name matches exactly; names are not unique
    pub async fn find_by_name(&self, full_name: Option<&str>) -> Result<Vec<Customer>, DomainError> {
        let full_name = require_argument(full_name, "Customer name")?;
        tracing::debug!(full_name, "Finding customers by name");

        self.customers.find_by_name(full_name).await
    }

    /// Overwrite a stored customer with the draft's fields
    pub async fn update(&self, customer: Option<&CustomerDraft>) -> Result<Customer, DomainError> {
        tracing::debug!("Updating customer");
        let customer = require_argument(customer, "Customer")?;
        let id = require_id(customer.id, "Customer")?;

        let fields = validate_fields(customer, |_| Ok(()))?;

        let updated = Customer {
            id,
            full_name: fields.full_name,
            address: fields.address,
            phone_number: fields.phone_number,
        };
        self.customers.update(&updated).await?;

        tracing::debug!(customer_id = %id, "Customer updated");
        Ok(updated)
    }

    pub async fn delete(&self, customer: Option<&CustomerDraft>) -> Result<(), DomainError> {
        tracing::debug!("Deleting customer");
        let customer = require_argument(customer, "Customer")?;
        let id = require_id(customer.id, "Customer")?;

        self.customers.delete(id).await?;

        tracing::debug!(customer_id = %id, "Customer deleted");
        Ok(())
    }
}

/// Field checks shared by create and update
///
/// Presence is checked first, then `check_id`, then emptiness and the phone
/// number format.
fn validate_fields(
    customer: &CustomerDraft,
    check_id: impl FnOnce(Option<CustomerId>) -> Result<(), DomainError>,
) -> Result<CustomerFields, DomainError> {
    let full_name = require_field(&customer.full_name, "Full name")?;
    let address = require_field(&customer.address, "Address")?;
    let phone_number = require_field(&customer.phone_number, "Phone number")?;
    check_id(customer.id)?;

    require_non_empty(&full_name, "Full name")?;
    require_non_empty(&address, "Address")?;
    require_non_empty(&phone_number, "Phone number")?;
    require_phone_number(&phone_number)?;

    Ok(CustomerFields {
        full_name,
        address,
        phone_number,
    })
}
