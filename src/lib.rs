//! # customer-rs
//!
//! A CRUD and merge-patch HTTP service for customer records stored in a single
//! relational table.
//!
//! ## Layers
//!
//! - **Handler** ([`server::handlers`]): validates path ids and bodies, maps failures to
//!   error kinds, shapes responses
//! - **Service** ([`core::service`]): forwards to storage; collapses list failures into a
//!   fixed persistence error
//! - **Storage** ([`storage`]): parameterized SQL, with a dynamic `SET` clause for PATCH
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use customer::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_store(InMemoryCustomerStore::new())
//!     .with_api_key("secret")
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    pub use crate::config::AppConfig;
    pub use crate::core::{
        Customer, CustomerError, CustomerManager, CustomerPatch, CustomerResult,
        CustomerService, CustomerStore,
    };
    pub use crate::server::{CustomerHandler, ServerBuilder};
    pub use crate::storage::InMemoryCustomerStore;
    #[cfg(feature = "mysql")]
    pub use crate::storage::MysqlCustomerStore;

    pub use async_trait::async_trait;
}
