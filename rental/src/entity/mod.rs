//! SeaORM table models
//!
//! Row-level mirrors of the `cars`, `customers` and `leases` tables. The
//! domain never sees these types; adapters convert them at the boundary.

pub mod cars;
pub mod customers;
pub mod leases;
