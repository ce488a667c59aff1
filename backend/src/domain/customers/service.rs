//! Customer registry service implementing the driving port.
//!
//! Business rules for registration (field validation, duplicate checks)
//! belong in this service; today every operation delegates straight to the
//! repository and forwards failures with their message intact.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{CustomerRegistry, CustomerRepository, CustomerRepositoryError};
use crate::domain::{Customer, Error};

/// Registry service backed by a customer repository.
#[derive(Clone)]
pub struct CustomerRegistryService<R> {
    repository: Arc<R>,
}

impl<R> CustomerRegistryService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: CustomerRepository> CustomerRegistryService<R> {
    fn map_repository_error(error: CustomerRepositoryError) -> Error {
        Error::internal(error.to_string())
    }
}

#[async_trait]
impl<R: CustomerRepository> CustomerRegistry for CustomerRegistryService<R> {
    async fn register_customer(&self, customer: Customer) -> Result<(), Error> {
        self.repository
            .create(&customer)
            .await
            .map_err(Self::map_repository_error)
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, Error> {
        self.repository
            .retrieve_all()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn find_customer_by_id(&self, id: &str) -> Result<Customer, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)
    }
}
