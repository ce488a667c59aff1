//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly; Diesel
//! uses them for compile-time query validation and type-safe SQL
//! generation.

diesel::table! {
    /// Registered customers.
    ///
    /// The `id` column is the caller-supplied primary key, which enforces
    /// the uniqueness invariant at the storage layer.
    customer (id) {
        /// Primary key: caller-supplied identifier.
        id -> Text,
        /// Customer name.
        nama -> Text,
        /// Postal address.
        address -> Text,
    }
}
