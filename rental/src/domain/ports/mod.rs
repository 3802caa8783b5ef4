//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod clock;
pub mod repositories;

pub use clock::Clock;
#[cfg(test)]
pub use clock::MockClock;
pub use repositories::{CarRepository, CustomerRepository, EntityLookup, LeaseRepository};
