//! Shared test harness for customer store backends
//!
//! Provides fixture helpers plus two macro-generated suites that any
//! `CustomerStore` must pass:
//! - `customer_store_tests!`: the storage contract
//! - `rest_integration_tests!`: full HTTP round-trips over that store
//!
//! Factories must hand out an empty store whose auto-increment counter starts
//! at 1 (a fresh in-memory store, or a truncated MySQL table).
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//!
//! customer_store_tests!(InMemoryCustomerStore::new());
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod store_contract_tests;


use customer::core::{Customer, CustomerStore};

/// The customer most fixtures start from
pub fn divya() -> Customer {
    Customer::new("Divya", 22, 30000)
}

/// Insert the given customers in order; they receive ids 1..=n
pub async fn seed(store: &dyn CustomerStore, customers: &[Customer]) {
    for customer in customers {
        store
            .create(customer.clone())
            .await
            .expect("Failed to seed customer");
    }
}
