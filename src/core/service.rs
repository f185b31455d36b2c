//! Service layer between the HTTP handlers and the store

use crate::core::customer::Customer;
use crate::core::error::{CustomerError, CustomerResult};
use crate::core::store::CustomerStore;
use async_trait::async_trait;
use std::sync::Arc;

/// Operations the handlers depend on
///
/// Kept as a trait so handlers can be exercised against a stub.
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// List all customers
    async fn get(&self) -> CustomerResult<Vec<Customer>>;

    /// Get a customer by id
    async fn get_by_id(&self, id: i64) -> CustomerResult<Customer>;

    /// Create a customer
    async fn create(&self, customer: Customer) -> CustomerResult<Customer>;

    /// Replace a customer. The target row is `customer.id`.
    async fn update(&self, customer: Customer) -> CustomerResult<Customer>;

    /// Delete a customer
    async fn delete(&self, id: i64) -> CustomerResult<()>;

    /// Partially update a customer
    async fn patch(&self, id: i64, customer: Customer) -> CustomerResult<Customer>;
}

/// Message carried by every collapsed list failure
pub const LIST_FAILURE_MESSAGE: &str = "db error";

/// Replace a storage error raised while listing with a fixed persistence failure.
///
/// The cause is logged and then dropped; callers only ever see
/// `PersistenceFailure("db error")` for a failed list.
pub fn collapse_list_error(err: CustomerError) -> CustomerError {
    tracing::error!(error = %err, "listing customers failed");
    CustomerError::persistence(LIST_FAILURE_MESSAGE)
}

/// [`CustomerService`] backed by any [`CustomerStore`]
#[derive(Clone)]
pub struct CustomerManager {
    store: Arc<dyn CustomerStore>,
}

impl CustomerManager {
    pub fn new(store: impl CustomerStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_arc(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CustomerService for CustomerManager {
    async fn get(&self) -> CustomerResult<Vec<Customer>> {
        self.store.get().await.map_err(collapse_list_error)
    }

    async fn get_by_id(&self, id: i64) -> CustomerResult<Customer> {
        self.store.get_by_id(id).await
    }

    async fn create(&self, customer: Customer) -> CustomerResult<Customer> {
        self.store.create(customer).await
    }

    async fn update(&self, customer: Customer) -> CustomerResult<Customer> {
        self.store.update(customer.id, customer).await
    }

    async fn delete(&self, id: i64) -> CustomerResult<()> {
        self.store.delete(id).await
    }

    async fn patch(&self, id: i64, customer: Customer) -> CustomerResult<Customer> {
        self.store.patch(id, customer).await
    }
}
