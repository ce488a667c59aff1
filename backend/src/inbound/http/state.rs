//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on the registry driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::CustomerRegistry;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Registry port backing the customer endpoints.
    pub customers: Arc<dyn CustomerRegistry>,
}

impl HttpState {
    /// Construct state over a registry port implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::FixtureCustomerRegistry;
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureCustomerRegistry));
    /// let _customers = state.customers.clone();
    /// ```
    pub fn new(customers: Arc<dyn CustomerRegistry>) -> Self {
        Self { customers }
    }
}
