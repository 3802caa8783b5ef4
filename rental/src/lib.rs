//! Car rental core
//!
//! Cars, customers and the leases that tie them together, with validation
//! and availability queries. Uses hexagonal (ports & adapters) architecture:
//! the services in `app` depend only on the ports in `domain`, and
//! `adapters` provides the PostgreSQL implementations.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod entity;
pub mod error;

#[cfg(test)]
mod test_utils;
