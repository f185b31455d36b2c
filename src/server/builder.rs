//! ServerBuilder for fluent API to build the HTTP server

use super::handlers::CustomerHandler;
use super::middleware::{ApiKey, require_api_key};
use super::router::{build_customer_routes, health_routes};
use crate::core::{CustomerManager, CustomerService, CustomerStore};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for the customer HTTP router
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryCustomerStore::new())
///     .with_api_key("secret")
///     .build()?;
/// ```
#[derive(Default)]
pub struct ServerBuilder {
    service: Option<Arc<dyn CustomerService>>,
    api_key: Option<ApiKey>,
    cors: bool,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve the given store through the default service layer
    pub fn with_store(self, store: impl CustomerStore + 'static) -> Self {
        self.with_service(CustomerManager::new(store))
    }

    /// Serve a custom service implementation
    pub fn with_service(mut self, service: impl CustomerService + 'static) -> Self {
        self.service = Some(Arc::new(service));
        self
    }

    /// Require `x-api-key: <key>` on every customer route
    ///
    /// Health routes stay public.
    pub fn with_api_key(mut self, key: impl AsRef<str>) -> Self {
        self.api_key = Some(ApiKey::new(key));
        self
    }

    /// Allow any origin
    pub fn with_cors(mut self, enabled: bool) -> Self {
        self.cors = enabled;
        self
    }

    /// Build the final router
    pub fn build(self) -> Result<Router> {
        let service = self
            .service
            .ok_or_else(|| anyhow::anyhow!("A store is required. Call .with_store()"))?;

        let mut customer_routes = build_customer_routes(CustomerHandler::from_arc(service));
        if let Some(key) = self.api_key {
            customer_routes = customer_routes
                .layer(axum::middleware::from_fn_with_state(key, require_api_key));
        }

        let app = health_routes().merge(customer_routes);
        let app = if self.cors {
            app.layer(CorsLayer::permissive())
        } else {
            app
        };

        Ok(app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http())))
    }
}
