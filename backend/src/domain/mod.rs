//! Domain entities, errors, ports, and the registry service.
//!
//! Purpose: Define strongly typed domain entities used by the HTTP and
//! persistence layers, the transport-agnostic error type, and the port
//! traits that keep each layer substitutable in tests.
//!
//! Public surface:
//! - Customer (alias to `customer::Customer`) — the registered customer
//!   record.
//! - Error / ErrorCode (aliases into `error`) — domain failure payload.
//! - `ports` — driving and driven capability traits with fixtures.
//! - `customers` — the registry service implementing the driving port.

pub mod customer;
pub mod customers;
pub mod error;
pub mod ports;

pub use self::customer::Customer;
pub use self::error::{Error, ErrorCode};
