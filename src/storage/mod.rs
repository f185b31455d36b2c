//! Storage implementations for different backends

pub mod in_memory;
#[cfg(feature = "mysql")]
pub mod mysql;
pub mod statement;

pub use in_memory::InMemoryCustomerStore;
#[cfg(feature = "mysql")]
pub use mysql::MysqlCustomerStore;
pub use statement::{SqlParam, UpdateBuilder, UpdateStatement};
