//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::EntityRegistry;
use super::exposure::RestExposure;
use crate::core::module::Module;
use anyhow::{Context, Result};
use axum::Router;
use axum::http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builder for creating HTTP servers with auto-registered routes
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new("catalog-service")
///     .register_module(AnimeModule::new(&config))
///     .register_module(UserModule::new(&config))
///     .build()?;
/// ```
pub struct ServerBuilder {
    service_name: String,
    entity_registry: EntityRegistry,
    custom_routes: Vec<Router>,
    cors_origins: Vec<String>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            entity_registry: EntityRegistry::new(),
            custom_routes: Vec::new(),
            cors_origins: Vec::new(),
        }
    }

    /// Add custom routes, mounted under the API prefix
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Allow cross-origin requests from these origins
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    /// Register a module
    ///
    /// This will:
    /// 1. Register all resources from the module
    /// 2. Collect the module's custom routes
    pub fn register_module(mut self, module: impl Module) -> Self {
        module.register_resources(&mut self.entity_registry);
        if let Some(routes) = module.custom_routes() {
            self.custom_routes.push(routes);
        }

        tracing::info!(
            module = module.name(),
            version = module.version(),
            resources = ?module.resource_names(),
            "module registered"
        );
        self
    }

    /// Build the final REST router
    ///
    /// This generates:
    /// - Health routes
    /// - CRUD routes for all registered resources
    /// - Custom module routes
    pub fn build(self) -> Result<Router> {
        let cors = self.cors_layer()?;
        tracing::info!(
            service = %self.service_name,
            resources = ?self.entity_registry.entity_types(),
            "building router"
        );
        let mut app = RestExposure::build_router(
            &self.entity_registry,
            self.custom_routes,
            &self.service_name,
        )
        .layer(TraceLayer::new_for_http());

        if let Some(cors) = cors {
            app = app.layer(cors);
        }
        Ok(app)
    }

    fn cors_layer(&self) -> Result<Option<CorsLayer>> {
        if self.cors_origins.is_empty() {
            return Ok(None);
        }

        let origins = self
            .cors_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin '{o}'"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers(Any),
        ))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
