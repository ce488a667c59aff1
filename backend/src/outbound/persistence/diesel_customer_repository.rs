//! PostgreSQL-backed `CustomerRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Customer;
use crate::domain::ports::{CustomerRepository, CustomerRepositoryError};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{CustomerRow, NewCustomerRow};
use super::pool::{DbPool, PoolError};
use super::schema::customer;

/// Diesel-backed implementation of the customer repository port.
#[derive(Clone)]
pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to repository port errors.
fn map_pool_error(error: PoolError) -> CustomerRepositoryError {
    map_basic_pool_error(error, |message| {
        CustomerRepositoryError::connection(message)
    })
}

/// Map Diesel errors to repository port errors.
fn map_diesel_error(error: diesel::result::Error) -> CustomerRepositoryError {
    map_basic_diesel_error(
        error,
        |message| CustomerRepositoryError::query(message),
        |message| CustomerRepositoryError::connection(message),
    )
}

#[async_trait]
impl CustomerRepository for DieselCustomerRepository {
    async fn create(&self, record: &Customer) -> Result<(), CustomerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewCustomerRow {
            id: &record.id,
            nama: &record.nama,
            address: &record.address,
        };

        diesel::insert_into(customer::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn retrieve_all(&self) -> Result<Vec<Customer>, CustomerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Storage ordering is the contract; no re-sorting here.
        let rows: Vec<CustomerRow> = customer::table
            .select(CustomerRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Customer, CustomerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        customer::table
            .filter(customer::id.eq(id))
            .select(CustomerRow::as_select())
            .first::<CustomerRow>(&mut conn)
            .await
            .map(Customer::from)
            .map_err(map_diesel_error)
    }
}
