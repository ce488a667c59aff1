//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementation of the customer repository port backed by
//! PostgreSQL via Diesel, with async support through `diesel-async` and
//! `bb8` connection pooling. Row structs (`models`) and schema definitions
//! (`schema`) are internal implementation details, never exposed to the
//! domain layer.

mod diesel_customer_repository;
mod diesel_error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_customer_repository::DieselCustomerRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
