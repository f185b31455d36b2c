//! Macro-generated test suite for `CustomerStore` contract validation.
//!
//! # Generated Tests
//!
//! ## Read
//! - `test_get_empty`: list on an empty table returns an empty vec
//! - `test_create_and_get_by_id`: create returns its input, row readable by assigned id
//! - `test_get_lists_all_rows`
//! - `test_get_by_id_missing`: unknown id is `EntityNotFound`
//!
//! ## Write
//! - `test_update_overwrites_every_field`
//! - `test_update_is_idempotent`
//! - `test_update_missing` / `test_delete_missing`: `EntityNotFound`
//! - `test_delete_existing`
//!
//! ## Patch
//! - `test_patch_writes_only_present_fields`
//! - `test_empty_patch_is_a_no_op`
//! - `test_patch_missing`
//!
//! ## Concurrency
//! - `test_concurrent_creates`

/// Generate a full `CustomerStore` conformance test suite.
///
/// `$factory` is re-evaluated for each test. For the concurrency test the store
/// must also be `Clone + 'static`.
#[macro_export]
macro_rules! customer_store_tests {
    ($factory:expr) => {
        mod customer_store_contract_tests {
            use super::*;
            use customer::core::{Customer, CustomerError, CustomerStore};

            // ==================================================================
            // Read
            // ==================================================================

            #[tokio::test]
            async fn test_get_empty() {
                let store = $factory;
                assert!(store.get().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_create_and_get_by_id() {
                let store = $factory;

                let created = store.create(divya()).await.unwrap();
                assert_eq!(created, divya());

                let fetched = store.get_by_id(1).await.unwrap();
                assert_eq!(fetched, divya().with_id(1));
            }

            #[tokio::test]
            async fn test_get_lists_all_rows() {
                let store = $factory;
                seed(
                    &store,
                    &[
                        divya(),
                        Customer::new("Asha", 30, 40000),
                        Customer::new("Ravi", 41, 0),
                    ],
                )
                .await;

                let mut customers = store.get().await.unwrap();
                customers.sort_by_key(|c| c.id);

                assert_eq!(customers.len(), 3);
                assert_eq!(customers[1], Customer::new("Asha", 30, 40000).with_id(2));
                assert_eq!(customers[2].salary, 0);
            }

            #[tokio::test]
            async fn test_get_by_id_missing() {
                let store = $factory;
                let err = store.get_by_id(404).await.unwrap_err();
                assert_eq!(err, CustomerError::not_found(404));
            }

            // ==================================================================
            // Write
            // ==================================================================

            #[tokio::test]
            async fn test_update_overwrites_every_field() {
                let store = $factory;
                seed(&store, &[divya()]).await;

                // Fields missing from the replacement are cleared
                let replacement = Customer::new("Divya K", 0, 0).with_id(1);
                let updated = store.update(1, replacement.clone()).await.unwrap();
                assert_eq!(updated, replacement);

                assert_eq!(store.get_by_id(1).await.unwrap(), replacement);
            }

            #[tokio::test]
            async fn test_update_is_idempotent() {
                let store = $factory;
                seed(&store, &[divya()]).await;

                let replacement = Customer::new("Divya", 23, 35000).with_id(1);
                store.update(1, replacement.clone()).await.unwrap();
                let first = store.get_by_id(1).await.unwrap();

                store.update(1, replacement.clone()).await.unwrap();
                let second = store.get_by_id(1).await.unwrap();

                assert_eq!(first, second);
                assert_eq!(second, replacement);
            }

            #[tokio::test]
            async fn test_update_missing() {
                let store = $factory;
                let err = store
                    .update(7, Customer::new("Nobody", 1, 1).with_id(7))
                    .await
                    .unwrap_err();
                assert_eq!(err, CustomerError::not_found(7));
            }

            #[tokio::test]
            async fn test_delete_existing() {
                let store = $factory;
                seed(&store, &[divya(), Customer::new("Asha", 30, 40000)]).await;

                store.delete(1).await.unwrap();

                assert_eq!(
                    store.get_by_id(1).await.unwrap_err(),
                    CustomerError::not_found(1)
                );
                assert_eq!(store.get().await.unwrap().len(), 1);
            }

            #[tokio::test]
            async fn test_delete_missing() {
                let store = $factory;
                let err = store.delete(12).await.unwrap_err();
                assert_eq!(err, CustomerError::not_found(12));
            }

            // ==================================================================
            // Patch
            // ==================================================================

            #[tokio::test]
            async fn test_patch_writes_only_present_fields() {
                let store = $factory;
                seed(&store, &[divya()]).await;

                let patched = store
                    .patch(1, Customer::new("divya", 0, 0))
                    .await
                    .unwrap();
                assert_eq!(patched, Customer::new("divya", 0, 0).with_id(1));

                assert_eq!(
                    store.get_by_id(1).await.unwrap(),
                    Customer::new("divya", 22, 30000).with_id(1)
                );

                store.patch(1, Customer::new("", 0, 50000)).await.unwrap();
                assert_eq!(
                    store.get_by_id(1).await.unwrap(),
                    Customer::new("divya", 22, 50000).with_id(1)
                );
            }

            #[tokio::test]
            async fn test_empty_patch_is_a_no_op() {
                let store = $factory;
                seed(&store, &[divya()]).await;

                let patched = store.patch(1, Customer::default()).await.unwrap();
                assert_eq!(patched, Customer::default());
                assert_eq!(store.get_by_id(1).await.unwrap(), divya().with_id(1));

                // Nothing is executed, so an unknown id is not an error either
                let patched = store.patch(999, Customer::default()).await.unwrap();
                assert_eq!(patched, Customer::default());
            }

            #[tokio::test]
            async fn test_patch_missing() {
                let store = $factory;
                let err = store
                    .patch(5, Customer::new("Ghost", 0, 0))
                    .await
                    .unwrap_err();
                assert_eq!(err, CustomerError::not_found(5));
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_creates() {
                let store = $factory;

                let mut handles = Vec::new();
                for i in 0..10 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        store
                            .create(Customer::new(format!("customer-{}", i), 20 + i, 1000))
                            .await
                    }));
                }
                for handle in handles {
                    handle.await.unwrap().unwrap();
                }

                let customers = store.get().await.unwrap();
                assert_eq!(customers.len(), 10);
                let mut ids: Vec<i64> = customers.iter().map(|c| c.id).collect();
                ids.sort();
                ids.dedup();
                assert_eq!(ids.len(), 10);
            }
        }
    };
}
