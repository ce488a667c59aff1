//! Driving port for customer registry operations.
//!
//! Inbound adapters (HTTP handlers) call this port so transport code never
//! imports persistence concerns. Production backs it with the registry
//! service over a repository; tests substitute a mock.

use async_trait::async_trait;

use crate::domain::{Customer, Error};

/// Domain use-case port for registering and reading customers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRegistry: Send + Sync {
    /// Register a new customer.
    async fn register_customer(&self, customer: Customer) -> Result<(), Error>;

    /// Return every registered customer.
    async fn list_customers(&self) -> Result<Vec<Customer>, Error>;

    /// Return the customer with the given id.
    async fn find_customer_by_id(&self, id: &str) -> Result<Customer, Error>;
}

/// Fixture registry used until persistence is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCustomerRegistry;

#[async_trait]
impl CustomerRegistry for FixtureCustomerRegistry {
    async fn register_customer(&self, _customer: Customer) -> Result<(), Error> {
        Ok(())
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, Error> {
        Ok(Vec::new())
    }

    async fn find_customer_by_id(&self, id: &str) -> Result<Customer, Error> {
        Err(Error::internal(format!("no customer with id {id}")))
    }
}
