//! Core module containing the customer model, errors and the layer traits

pub mod customer;
pub mod error;
pub mod patch;
pub mod service;
pub mod store;

pub use customer::{Customer, CustomerPatch};
pub use error::{CustomerError, CustomerResult, ErrorResponse};
pub use patch::merge_onto_empty;
pub use service::{CustomerManager, CustomerService, LIST_FAILURE_MESSAGE, collapse_list_error};
pub use store::CustomerStore;
