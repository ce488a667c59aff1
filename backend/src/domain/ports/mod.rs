//! Domain ports for the customer registry boundary.
//!
//! Each port is the minimal capability set one layer requires from the
//! next: handlers depend on [`CustomerRegistry`], the registry service
//! depends on [`CustomerRepository`]. Every port ships a fixture
//! implementation for wiring without infrastructure and a mockall mock for
//! contract tests.

mod customer_registry;
mod customer_repository;

#[cfg(test)]
pub use customer_registry::MockCustomerRegistry;
pub use customer_registry::{CustomerRegistry, FixtureCustomerRegistry};
#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
pub use customer_repository::{
    CustomerRepository, CustomerRepositoryError, FixtureCustomerRepository,
};
