//! Customer domain entity

use serde::{Deserialize, Serialize};

/// Store-generated identifier for a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub i64);

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted customer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub full_name: String,
    pub address: String,
    /// Digits only
    pub phone_number: String,
}

/// A customer that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub full_name: String,
    pub address: String,
    pub phone_number: String,
}

impl NewCustomer {
    pub fn with_id(self, id: CustomerId) -> Customer {
        Customer {
            id,
            full_name: self.full_name,
            address: self.address,
            phone_number: self.phone_number,
        }
    }
}

/// Unvalidated customer payload as assembled by a caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub id: Option<CustomerId>,
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl CustomerDraft {
    pub fn new(full_name: &str, address: &str, phone_number: &str) -> Self {
        Self {
            id: None,
            full_name: Some(full_name.to_string()),
            address: Some(address.to_string()),
            phone_number: Some(phone_number.to_string()),
        }
    }
}

impl From<&Customer> for CustomerDraft {
    fn from(customer: &Customer) -> Self {
        Self {
            id: Some(customer.id),
            full_name: Some(customer.full_name.clone()),
            address: Some(customer.address.clone()),
            phone_number: Some(customer.phone_number.clone()),
        }
    }
}

impl From<NewCustomer> for CustomerDraft {
    fn from(customer: NewCustomer) -> Self {
        Self {
            id: None,
            full_name: Some(customer.full_name),
            address: Some(customer.address),
            phone_number: Some(customer.phone_number),
        }
    }
}
