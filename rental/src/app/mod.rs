//! Application layer
//!
//! The car, customer and lease managers. Each validates its input before
//! touching storage; the lease manager also resolves references and answers
//! availability queries.

pub mod car_service;
pub mod customer_service;
pub mod lease_service;
pub mod overlap;
pub mod seed;
pub mod validation;

pub use car_service::CarService;
pub use customer_service::CustomerService;
pub use lease_service::{CarAvailability, LeaseService};
pub use overlap::OverlapPolicy;
pub use seed::{load_sample_data, SeedReport};
