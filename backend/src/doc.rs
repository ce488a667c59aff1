//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated specification for the REST API: the
//! customer endpoints, the health probes, and the wire schemas. Swagger UI
//! serves the document in debug builds.

use utoipa::OpenApi;

use crate::domain::Customer;
use crate::inbound::http::error::ErrorBody;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customer registry API",
        description = "HTTP interface for registering and listing customers."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::customers::list_customers,
        crate::inbound::http::customers::register_customer,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Customer, ErrorBody)),
    tags(
        (name = "customers", description = "Customer registration and lookup"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;
