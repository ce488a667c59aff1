//! Customer API handlers.
//!
//! ```text
//! GET /customer
//! POST /customer {"Id":"C001","Nama":"Name One","Address":"Dummy One"}
//! ```

use actix_web::{get, post, web};

use crate::domain::Customer;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// List registered customers.
///
/// An empty store serialises as `[]`, never `null`.
#[utoipa::path(
    get,
    path = "/customer",
    responses(
        (status = 200, description = "Registered customers", body = [Customer]),
        (status = 500, description = "Registry failure", body = ErrorBody)
    ),
    tags = ["customers"],
    operation_id = "listCustomers"
)]
#[get("/customer")]
pub async fn list_customers(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Customer>>> {
    let customers = state.customers.list_customers().await?;
    Ok(web::Json(customers))
}

/// Register a customer and echo the stored record.
///
/// Body decoding failures are rejected with 400 by the JSON extractor
/// before the registry port is invoked.
#[utoipa::path(
    post,
    path = "/customer",
    request_body = Customer,
    responses(
        (status = 200, description = "Customer registered", body = Customer),
        (status = 400, description = "Malformed request body", body = ErrorBody),
        (status = 500, description = "Registry failure", body = ErrorBody)
    ),
    tags = ["customers"],
    operation_id = "registerCustomer"
)]
#[post("/customer")]
pub async fn register_customer(
    state: web::Data<HttpState>,
    payload: web::Json<Customer>,
) -> ApiResult<web::Json<Customer>> {
    let customer = payload.into_inner();
    state.customers.register_customer(customer.clone()).await?;
    Ok(web::Json(customer))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::Error;
    use crate::domain::ports::{CustomerRegistry, MockCustomerRegistry};
    use crate::inbound::http::error::json_error_handler;

    fn sample_customer() -> Customer {
        Customer {
            id: "C001".to_owned(),
            nama: "Name One".to_owned(),
            address: "Dummy One".to_owned(),
        }
    }

    fn test_app(
        registry: Arc<dyn CustomerRegistry>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(HttpState::new(registry)))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(list_customers)
            .service(register_customer)
    }

    #[actix_web::test]
    async fn list_customers_returns_registered_records() {
        let mut registry = MockCustomerRegistry::new();
        let customers = vec![sample_customer()];
        registry
            .expect_list_customers()
            .times(1)
            .return_once(move || Ok(customers));

        let app = actix_test::init_service(test_app(Arc::new(registry))).await;
        let request = actix_test::TestRequest::get().uri("/customer").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body,
            json!([{ "Id": "C001", "Nama": "Name One", "Address": "Dummy One" }])
        );
    }

    #[actix_web::test]
    async fn list_customers_serialises_an_empty_store_as_empty_array() {
        let mut registry = MockCustomerRegistry::new();
        registry
            .expect_list_customers()
            .times(1)
            .return_once(|| Ok(Vec::new()));

        let app = actix_test::init_service(test_app(Arc::new(registry))).await;
        let request = actix_test::TestRequest::get().uri("/customer").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn list_customers_maps_registry_failure_to_500() {
        let mut registry = MockCustomerRegistry::new();
        registry
            .expect_list_customers()
            .times(1)
            .return_once(|| Err(Error::internal("failed")));

        let app = actix_test::init_service(test_app(Arc::new(registry))).await;
        let request = actix_test::TestRequest::get().uri("/customer").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({ "Err": "failed" }));
    }

    #[actix_web::test]
    async fn register_customer_echoes_the_decoded_payload() {
        let mut registry = MockCustomerRegistry::new();
        registry
            .expect_register_customer()
            .withf(|customer| customer.id == "C001")
            .times(1)
            .return_once(|_| Ok(()));

        let app = actix_test::init_service(test_app(Arc::new(registry))).await;
        let request = actix_test::TestRequest::post()
            .uri("/customer")
            .set_json(&sample_customer())
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body,
            json!({ "Id": "C001", "Nama": "Name One", "Address": "Dummy One" })
        );
    }

    #[actix_web::test]
    async fn register_customer_rejects_an_empty_body_before_the_registry() {
        let mut registry = MockCustomerRegistry::new();
        registry.expect_register_customer().times(0);

        let app = actix_test::init_service(test_app(Arc::new(registry))).await;
        let request = actix_test::TestRequest::post().uri("/customer").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        let message = body
            .get("Err")
            .and_then(Value::as_str)
            .expect("Err message");
        assert!(!message.is_empty());
    }

    #[actix_web::test]
    async fn register_customer_rejects_a_malformed_body_before_the_registry() {
        let mut registry = MockCustomerRegistry::new();
        registry.expect_register_customer().times(0);

        let app = actix_test::init_service(test_app(Arc::new(registry))).await;
        let request = actix_test::TestRequest::post()
            .uri("/customer")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"Id\":")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        let message = body
            .get("Err")
            .and_then(Value::as_str)
            .expect("Err message");
        assert!(!message.is_empty());
    }

    #[actix_web::test]
    async fn register_customer_maps_registry_failure_to_500() {
        let mut registry = MockCustomerRegistry::new();
        registry
            .expect_register_customer()
            .times(1)
            .return_once(|_| Err(Error::internal("failed")));

        let app = actix_test::init_service(test_app(Arc::new(registry))).await;
        let request = actix_test::TestRequest::post()
            .uri("/customer")
            .set_json(&sample_customer())
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({ "Err": "failed" }));
    }
}
