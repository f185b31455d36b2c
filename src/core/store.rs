//! Storage trait for customer persistence

use crate::core::customer::Customer;
use crate::core::error::CustomerResult;
use async_trait::async_trait;

/// Persistence operations against the `customer` table
///
/// Implementations classify their own failures: a missing row is
/// [`EntityNotFound`](crate::core::error::CustomerError::EntityNotFound), anything
/// else coming from the driver is
/// [`PersistenceFailure`](crate::core::error::CustomerError::PersistenceFailure).
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Fetch every row. A row that cannot be scanned aborts the whole list.
    async fn get(&self) -> CustomerResult<Vec<Customer>>;

    /// Fetch the row with the given id
    async fn get_by_id(&self, id: i64) -> CustomerResult<Customer>;

    /// Insert name/age/salary and return the input unchanged.
    ///
    /// The id assigned by the store is not read back.
    async fn create(&self, customer: Customer) -> CustomerResult<Customer>;

    /// Overwrite name/age/salary of the row with the given id
    async fn update(&self, id: i64, customer: Customer) -> CustomerResult<Customer>;

    /// Remove the row with the given id
    async fn delete(&self, id: i64) -> CustomerResult<()>;

    /// Write only the non-zero, non-empty fields of `customer`.
    ///
    /// When no field qualifies nothing is executed and a default customer is
    /// returned.
    async fn patch(&self, id: i64, customer: Customer) -> CustomerResult<Customer>;
}
