//! Customer service binary
//!
//! Usage: `customer-server [config.yaml]` (or set `CUSTOMER_CONFIG`).
//! Without `database.url` the service runs on the in-memory store.

use anyhow::Result;
use customer::config::AppConfig;
use customer::prelude::*;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("CUSTOMER_CONFIG").ok());
    let config = AppConfig::load(config_path.as_deref())?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let builder = ServerBuilder::new().with_cors(config.server.cors);
    let builder = attach_store(builder, &config).await?;
    let builder = match &config.auth.api_key {
        Some(key) => builder.with_api_key(key),
        None => {
            tracing::warn!("no api key configured, customer routes are unauthenticated");
            builder
        }
    };
    let app = builder.build()?;

    let addr = config.listen_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("customer service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(feature = "mysql")]
async fn attach_store(builder: ServerBuilder, config: &AppConfig) -> Result<ServerBuilder> {
    use customer::storage::mysql::ensure_schema;

    let Some(url) = &config.database.url else {
        tracing::info!("no database url configured, using the in-memory store");
        return Ok(builder.with_store(InMemoryCustomerStore::new()));
    };

    let mut store = MysqlCustomerStore::connect(url, config.database.max_connections).await?;
    ensure_schema(store.pool()).await?;
    if let Some(timeout) = config.database.query_timeout() {
        store = store.with_query_timeout(timeout);
    }
    tracing::info!("connected to MySQL");

    Ok(builder.with_store(store))
}

#[cfg(not(feature = "mysql"))]
async fn attach_store(builder: ServerBuilder, config: &AppConfig) -> Result<ServerBuilder> {
    if config.database.url.is_some() {
        anyhow::bail!("database.url is set but this build lacks the `mysql` feature");
    }
    tracing::info!("using the in-memory store");
    Ok(builder.with_store(InMemoryCustomerStore::new()))
}
