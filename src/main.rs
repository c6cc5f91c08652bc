//! catalog-service binary
//!
//! Reads configuration from `CATALOG_CONFIG` and the `CATALOG_*` overrides,
//! then serves the anime and user modules until SIGTERM or Ctrl+C.

use anyhow::Result;
use catalog::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .compact()
        .init();

    let config = ServiceConfig::from_env()?;
    tracing::info!(addr = %config.bind_addr(), seed = config.seed, "starting catalog-service");

    ServerBuilder::new("catalog-service")
        .with_cors_origins(config.server.cors_origins.clone())
        .register_module(AnimeModule::new(&config))
        .register_module(UserModule::new(&config))
        .serve(&config.bind_addr())
        .await
}
