//! Domain entities
//!
//! Persisted records (`Car`, `Customer`, `LeaseRecord`, `Lease`) always carry
//! an id; transient records (`New*`) never do. Drafts are the unvalidated
//! payloads callers hand to the managers.
//! These are separate from the SeaORM models in the `entity` module.

pub mod car;
pub mod customer;
pub mod lease;

pub use car::{Car, CarDraft, CarId, NewCar};
pub use customer::{Customer, CustomerDraft, CustomerId, NewCustomer};
pub use lease::{Lease, LeaseDraft, LeaseId, LeasePeriod, LeaseRecord, NewLease};
