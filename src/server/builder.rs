//! ServerBuilder for fluent API to build the plugin server

use super::exposure::RestExposure;
use super::host::PluginHost;
use crate::config::PluginConfig;
use crate::core::store::ExtensionStore;
use crate::equipment::model::{Equipment, EquipmentGroup};
use crate::storage::InMemoryExtensionStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the plugin HTTP server
///
/// Stores that are not provided default to in-memory ones.
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(PluginConfig::from_yaml_file("equipments.yaml")?)
///     .serve("127.0.0.1:8090")
///     .await?;
/// ```
pub struct ServerBuilder {
    config: PluginConfig,
    group_store: Option<Arc<dyn ExtensionStore<EquipmentGroup>>>,
    equipment_store: Option<Arc<dyn ExtensionStore<Equipment>>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            config: PluginConfig::default(),
            group_store: None,
            equipment_store: None,
            custom_routes: Vec::new(),
        }
    }

    /// Use the given configuration
    pub fn with_config(mut self, config: PluginConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the store of equipment groups
    pub fn with_group_store(mut self, store: impl ExtensionStore<EquipmentGroup> + 'static) -> Self {
        self.group_store = Some(Arc::new(store));
        self
    }

    /// Set the store of equipment
    pub fn with_equipment_store(mut self, store: impl ExtensionStore<Equipment> + 'static) -> Self {
        self.equipment_store = Some(Arc::new(store));
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the host without seeding it
    pub fn build_host(mut self) -> Result<PluginHost> {
        let groups = self
            .group_store
            .take()
            .unwrap_or_else(|| Arc::new(InMemoryExtensionStore::<EquipmentGroup>::new()));
        let equipments = self
            .equipment_store
            .take()
            .unwrap_or_else(|| Arc::new(InMemoryExtensionStore::<Equipment>::new()));

        Ok(PluginHost::new(self.config, groups, equipments)?)
    }

    /// Build the final REST router
    ///
    /// Seed records are not loaded; use [`serve`](Self::serve) or
    /// [`PluginHost::seed`] for that.
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Seed the stores and serve with graceful shutdown
    ///
    /// This will:
    /// - Load the configured seed records
    /// - Bind to the provided address
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(mut self, addr: &str) -> Result<()> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = self.build_host()?;
        host.seed().await?;

        let app = RestExposure::build_router(Arc::new(host), custom_routes)?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_config() {
        let builder = ServerBuilder::new();
        assert_eq!(builder.config.settings.base.page_size, 10);
        assert!(builder.group_store.is_none());
        assert!(builder.equipment_store.is_none());
        assert!(builder.custom_routes.is_empty());
    }

    #[test]
    fn test_with_custom_routes_appends_router() {
        let builder = ServerBuilder::new()
            .with_custom_routes(Router::new())
            .with_custom_routes(Router::new());
        assert_eq!(builder.custom_routes.len(), 2);
    }

    #[test]
    fn test_build_host_defaults_to_in_memory_stores() {
        let host = ServerBuilder::new()
            .build_host()
            .expect("build_host should succeed");
        assert_eq!(host.config.server.address, "127.0.0.1:8090");
    }

    #[tokio::test]
    async fn test_build_host_keeps_provided_stores() {
        use crate::core::extension::Metadata;
        use crate::equipment::model::EquipmentGroupSpec;

        let groups = InMemoryExtensionStore::<EquipmentGroup>::new();
        groups
            .create(EquipmentGroup::new(
                Metadata::named("desk"),
                EquipmentGroupSpec {
                    display_name: "Desk".to_string(),
                    priority: None,
                },
            ))
            .await
            .unwrap();

        let host = ServerBuilder::new()
            .with_group_store(groups)
            .build_host()
            .expect("build_host should succeed");
        assert!(host.groups.fetch("desk").await.unwrap().is_some());
    }

    #[test]
    fn test_build_fails_on_broken_template_override() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("equipments.html"), "{% if %}").unwrap();

        let mut config = PluginConfig::default();
        config.templates = Some(dir.path().to_path_buf());
        let result = ServerBuilder::new().with_config(config).build();
        assert!(result.is_err(), "a broken template override should fail the build");
    }

    #[test]
    fn test_build_produces_router() {
        let router = ServerBuilder::new()
            .build()
            .expect("build should produce a Router");
        let _ = router;
    }
}
