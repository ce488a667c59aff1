//! Port for customer persistence.

use async_trait::async_trait;

use crate::domain::Customer;

/// Errors raised by customer repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomerRepositoryError {
    /// Repository connection could not be established.
    #[error("customer repository connection failed: {message}")]
    Connection { message: String },
    /// Statement failed during execution, including lookups matching no row.
    #[error("customer repository query failed: {message}")]
    Query { message: String },
}

impl CustomerRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for writing and reading customer records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persist a new customer record.
    async fn create(&self, customer: &Customer) -> Result<(), CustomerRepositoryError>;

    /// Read every customer record, preserving storage ordering.
    async fn retrieve_all(&self) -> Result<Vec<Customer>, CustomerRepositoryError>;

    /// Read the customer with the given id.
    ///
    /// A missing id surfaces as a query error, never as a zero-value
    /// success.
    async fn find_by_id(&self, id: &str) -> Result<Customer, CustomerRepositoryError>;
}

/// Fixture implementation for tests and wiring without persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCustomerRepository;

#[async_trait]
impl CustomerRepository for FixtureCustomerRepository {
    async fn create(&self, _customer: &Customer) -> Result<(), CustomerRepositoryError> {
        Ok(())
    }

    async fn retrieve_all(&self) -> Result<Vec<Customer>, CustomerRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: &str) -> Result<Customer, CustomerRepositoryError> {
        // The fixture holds no rows, so every lookup misses.
        Err(CustomerRepositoryError::query("record not found"))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    fn sample_customer() -> Customer {
        Customer {
            id: "C001".to_owned(),
            nama: "Name One".to_owned(),
            address: "Dummy One".to_owned(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_create_succeeds() {
        FixtureCustomerRepository
            .create(&sample_customer())
            .await
            .expect("fixture create succeeds");
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_retrieve_all_returns_empty() {
        let listed = FixtureCustomerRepository
            .retrieve_all()
            .await
            .expect("fixture list succeeds");
        assert!(listed.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_find_surfaces_a_query_error() {
        let error = FixtureCustomerRepository
            .find_by_id("C404")
            .await
            .expect_err("fixture lookup misses");
        assert!(matches!(error, CustomerRepositoryError::Query { .. }));
    }

    #[rstest]
    fn query_error_formats_message() {
        let err = CustomerRepositoryError::query("broken sql");
        assert!(err.to_string().contains("broken sql"));
    }

    #[rstest]
    fn connection_error_formats_message() {
        let err = CustomerRepositoryError::connection("refused");
        let msg = err.to_string();
        assert!(msg.contains("connection failed"));
        assert!(msg.contains("refused"));
    }
}
