//! Server construction and wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing::warn;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::customers::CustomerRegistryService;
use crate::domain::ports::{CustomerRegistry, FixtureCustomerRegistry};
use crate::inbound::http::customers::{list_customers, register_customer};
use crate::inbound::http::error::json_error_handler;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::DieselCustomerRepository;

/// Build the customer registry port based on configuration.
///
/// Uses the Diesel-backed repository when a pool is available, otherwise
/// falls back to the fixture so the server still starts in environments
/// without a database.
fn build_customer_registry(config: &ServerConfig) -> Arc<dyn CustomerRegistry> {
    match &config.db_pool {
        Some(pool) => Arc::new(CustomerRegistryService::new(Arc::new(
            DieselCustomerRepository::new(pool.clone()),
        ))),
        None => {
            warn!("no database pool configured; serving fixture customers");
            Arc::new(FixtureCustomerRegistry)
        }
    }
}

/// Bind the HTTP server and return the running handle.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the listener cannot bind the configured
/// address.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let state = HttpState::new(build_customer_registry(&config));
    let health_state = web::Data::new(HealthState::new());
    let app_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(app_health_state.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(list_customers)
            .service(register_customer)
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(config.bind_addr)?;

    health_state.mark_ready();
    Ok(server.run())
}
