//! Router builder utilities for customer routes

use super::handlers::{
    CustomerHandler, create_customer, delete_customer, get_customer, list_customers,
    patch_customer, update_customer,
};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Build the customer routes
///
/// - GET    /customer       - List all customers
/// - POST   /customer       - Create a customer
/// - GET    /customer/{id}  - Get a customer
/// - PUT    /customer/{id}  - Replace a customer
/// - PATCH  /customer/{id}  - Merge-patch a customer
/// - DELETE /customer/{id}  - Delete a customer
pub fn build_customer_routes(handler: CustomerHandler) -> Router {
    Router::new()
        .route("/customer", get(list_customers).post(create_customer))
        .route(
            "/customer/{id}",
            get(get_customer)
                .put(update_customer)
                .patch(patch_customer)
                .delete(delete_customer),
        )
        .with_state(handler)
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "customer-rs"
    }))
}
