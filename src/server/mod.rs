//! Server module for building the customer HTTP server
//!
//! This module provides a `ServerBuilder` that registers:
//! - CRUD and merge-patch routes for customers
//! - Health check routes
//! - The optional API-key middleware

pub mod builder;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::CustomerHandler;
pub use middleware::{API_KEY_HEADER, ApiKey, require_api_key};
