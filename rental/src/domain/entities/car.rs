//! Car domain entity
//!
//! A vehicle of the rental fleet.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store-generated identifier for a car
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CarId(pub i64);

impl std::fmt::Display for CarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted car
///
/// Two cars are equal only when every field, id included, matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub brand: String,
    pub description: String,
    pub daily_price: Decimal,
}

/// A car that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub brand: String,
    pub description: String,
    pub daily_price: Decimal,
}

impl NewCar {
    /// Attach the identifier the store generated for this car
    pub fn with_id(self, id: CarId) -> Car {
        Car {
            id,
            brand: self.brand,
            description: self.description,
            daily_price: self.daily_price,
        }
    }
}

/// Unvalidated car payload as assembled by a caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarDraft {
    pub id: Option<CarId>,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub daily_price: Option<Decimal>,
}

impl CarDraft {
    pub fn new(brand: &str, description: &str, daily_price: Decimal) -> Self {
        Self {
            id: None,
            brand: Some(brand.to_string()),
            description: Some(description.to_string()),
            daily_price: Some(daily_price),
        }
    }
}

impl From<&Car> for CarDraft {
    fn from(car: &Car) -> Self {
        Self {
            id: Some(car.id),
            brand: Some(car.brand.clone()),
            description: Some(car.description.clone()),
            daily_price: Some(car.daily_price),
        }
    }
}

impl From<NewCar> for CarDraft {
    fn from(car: NewCar) -> Self {
        Self {
            id: None,
            brand: Some(car.brand),
            description: Some(car.description),
            daily_price: Some(car.daily_price),
        }
    }
}
