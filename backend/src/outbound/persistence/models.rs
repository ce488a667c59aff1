//! Diesel row models for the customer table.

use diesel::prelude::*;

use crate::domain::Customer;
use crate::outbound::persistence::schema::customer;

/// Queryable row for registered customers.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = customer)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CustomerRow {
    pub id: String,
    pub nama: String,
    pub address: String,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: row.id,
            nama: row.nama,
            address: row.address,
        }
    }
}

/// Insertable row for new customers.
#[derive(Debug, Insertable)]
#[diesel(table_name = customer)]
pub(crate) struct NewCustomerRow<'a> {
    pub id: &'a str,
    pub nama: &'a str,
    pub address: &'a str,
}
