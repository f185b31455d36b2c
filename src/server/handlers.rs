//! HTTP handlers for customer operations
//!
//! [`CustomerHandler`] holds the request validation contract and works on raw path
//! strings and body bytes, so it can be driven without an HTTP stack. The axum
//! route functions below only extract those raw parts and shape the response.

use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, State,
        rejection::{BytesRejection, PathRejection},
    },
    http::StatusCode,
};
use std::sync::Arc;

use crate::core::{Customer, CustomerError, CustomerResult, CustomerService, merge_onto_empty};

/// Parse a path id. Empty is a missing parameter, anything that is not an
/// integer is an invalid one.
pub fn parse_id(raw: &str) -> CustomerResult<i64> {
    if raw.is_empty() {
        tracing::warn!("customer id missing from path");
        return Err(CustomerError::missing_param("id"));
    }
    raw.parse::<i64>().map_err(|e| {
        tracing::warn!(id = raw, error = %e, "customer id is not an integer");
        CustomerError::invalid_param("id")
    })
}

fn decode_body(body: &[u8]) -> CustomerResult<Customer> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "customer body could not be decoded");
        CustomerError::invalid_param("body")
    })
}

/// Validates requests and forwards them to the service
#[derive(Clone)]
pub struct CustomerHandler {
    service: Arc<dyn CustomerService>,
}

impl CustomerHandler {
    pub fn new(service: impl CustomerService + 'static) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    pub fn from_arc(service: Arc<dyn CustomerService>) -> Self {
        Self { service }
    }

    pub async fn list(&self) -> CustomerResult<Vec<Customer>> {
        tracing::debug!("list customers");
        self.service.get().await
    }

    pub async fn get_by_id(&self, id: &str) -> CustomerResult<Customer> {
        let id = parse_id(id)?;
        tracing::debug!(id, "get customer");
        self.service.get_by_id(id).await
    }

    /// An id in the body is forwarded as is; the stored id is assigned by the store
    pub async fn create(&self, body: &[u8]) -> CustomerResult<Customer> {
        let customer = decode_body(body)?;
        tracing::debug!(name = %customer.name, "create customer");
        self.service.create(customer).await
    }

    /// The path id replaces whatever id the body carries
    pub async fn update(&self, id: &str, body: &[u8]) -> CustomerResult<Customer> {
        let id = parse_id(id)?;
        let customer = decode_body(body)?.with_id(id);
        tracing::debug!(id, "update customer");
        self.service.update(customer).await
    }

    pub async fn delete(&self, id: &str) -> CustomerResult<()> {
        let id = parse_id(id)?;
        tracing::debug!(id, "delete customer");
        self.service.delete(id).await
    }

    /// Merge the body onto an empty customer and forward the fields it sets.
    ///
    /// A non-zero id in the body is rejected; the path id is the only target.
    pub async fn patch(&self, id: &str, body: &[u8]) -> CustomerResult<Customer> {
        let id = parse_id(id)?;
        let customer = merge_onto_empty(body)?;
        if customer.id != 0 {
            tracing::warn!(id, body_id = customer.id, "patch body tried to set id");
            return Err(CustomerError::invalid_param("id"));
        }

        tracing::debug!(id, "patch customer");
        self.service.patch(id, customer).await
    }
}

fn path_id(path: Result<Path<String>, PathRejection>) -> CustomerResult<String> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::warn!(error = %rejection, "unusable customer id in path");
        CustomerError::invalid_param("id")
    })
}

/// GET /customer
pub async fn list_customers(
    State(handler): State<CustomerHandler>,
) -> Result<Json<Vec<Customer>>, CustomerError> {
    handler.list().await.map(Json)
}

/// GET /customer/{id}
pub async fn get_customer(
    State(handler): State<CustomerHandler>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Customer>, CustomerError> {
    handler.get_by_id(&path_id(path)?).await.map(Json)
}

/// POST /customer
pub async fn create_customer(
    State(handler): State<CustomerHandler>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Customer>), CustomerError> {
    let body = body.map_err(|_| CustomerError::invalid_param("body"))?;
    let created = handler.create(&body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /customer/{id}
pub async fn update_customer(
    State(handler): State<CustomerHandler>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Customer>, CustomerError> {
    let id = path_id(path)?;
    parse_id(&id)?;
    let body = body.map_err(|_| CustomerError::invalid_param("body"))?;
    handler.update(&id, &body).await.map(Json)
}

/// DELETE /customer/{id}
pub async fn delete_customer(
    State(handler): State<CustomerHandler>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, CustomerError> {
    handler.delete(&path_id(path)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /customer/{id}
pub async fn patch_customer(
    State(handler): State<CustomerHandler>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Customer>, CustomerError> {
    // The id is validated before the body is read
    let id = path_id(path)?;
    parse_id(&id)?;
    let body = body.map_err(|e| {
        tracing::warn!(error = %e, "failed to read patch body");
        CustomerError::operation_failed("parsing error")
    })?;
    handler.patch(&id, &body).await.map(Json)
}
