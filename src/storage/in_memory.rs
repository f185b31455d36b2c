//! In-memory implementation of CustomerStore for testing and development

use crate::core::{Customer, CustomerError, CustomerPatch, CustomerResult, CustomerStore};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Customer>,
    next_id: i64,
}

/// In-memory customer table
///
/// Mirrors the SQL store: ids are assigned by an auto-increment counter, `create`
/// returns its input unchanged and an empty patch touches nothing. Uses RwLock for
/// thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryCustomerStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryCustomerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with rows; ids of the given customers are kept
    pub fn with_rows(rows: impl IntoIterator<Item = Customer>) -> Self {
        let mut table = Table::default();
        for row in rows {
            table.next_id = table.next_id.max(row.id);
            table.rows.insert(row.id, row);
        }
        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }

    fn read(&self) -> CustomerResult<std::sync::RwLockReadGuard<'_, Table>> {
        self.table
            .read()
            .map_err(|e| CustomerError::persistence(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> CustomerResult<std::sync::RwLockWriteGuard<'_, Table>> {
        self.table
            .write()
            .map_err(|e| CustomerError::persistence(format!("Failed to acquire write lock: {}", e)))
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn get(&self) -> CustomerResult<Vec<Customer>> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> CustomerResult<Customer> {
        self.read()?
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| CustomerError::not_found(id))
    }

    async fn create(&self, customer: Customer) -> CustomerResult<Customer> {
        let mut table = self.write()?;
        let id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| CustomerError::persistence("customer id space exhausted"))?;
        table.next_id = id;
        table.rows.insert(
            id,
            Customer {
                id,
                ..customer.clone()
            },
        );

        Ok(customer)
    }

    async fn update(&self, id: i64, customer: Customer) -> CustomerResult<Customer> {
        let mut table = self.write()?;
        let row = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| CustomerError::not_found(id))?;

        row.name = customer.name.clone();
        row.age = customer.age;
        row.salary = customer.salary;

        Ok(customer)
    }

    async fn delete(&self, id: i64) -> CustomerResult<()> {
        self.write()?
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| CustomerError::not_found(id))
    }

    async fn patch(&self, id: i64, customer: Customer) -> CustomerResult<Customer> {
        let patch = CustomerPatch::from(&customer);
        if patch.is_empty() {
            return Ok(Customer::default());
        }

        let mut table = self.write()?;
        let row = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| CustomerError::not_found(id))?;
        patch.apply_to(row);

        Ok(customer.with_id(id))
    }
}
