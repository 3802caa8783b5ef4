//! Test fixtures
//!
//! A small cast of cars and customers. The `*_draft` variants feed the
//! services; the plain ones go straight into a repository.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::entities::{CarDraft, CustomerDraft, NewCar, NewCustomer};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn bmw() -> NewCar {
    NewCar {
        brand: "BMW".to_string(),
        description: "I'm german.".to_string(),
        daily_price: Decimal::from(1350),
    }
}

pub fn aston_martin() -> NewCar {
    NewCar {
        brand: "Aston Martin".to_string(),
        description: "James Bond is my father!".to_string(),
        daily_price: Decimal::from(2000),
    }
}

pub fn james_bond() -> NewCustomer {
    NewCustomer {
        full_name: "James Bond".to_string(),
        address: "tajemna 762 10".to_string(),
        phone_number: "007007007".to_string(),
    }
}

pub fn moneypenny() -> NewCustomer {
    NewCustomer {
        full_name: "Eve Moneypenny".to_string(),
        address: "Vauxhall Cross 85".to_string(),
        phone_number: "4402079".to_string(),
    }
}

pub fn bmw_draft() -> CarDraft {
    bmw().into()
}

pub fn aston_martin_draft() -> CarDraft {
    aston_martin().into()
}

pub fn james_bond_draft() -> CustomerDraft {
    james_bond().into()
}

pub fn moneypenny_draft() -> CustomerDraft {
    moneypenny().into()
}
