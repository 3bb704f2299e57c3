//! REST exposure of the plugin
//!
//! Consumes a `PluginHost` and produces an Axum `Router` with request
//! tracing applied to every route.

use super::super::host::PluginHost;
use crate::server::router::build_plugin_routes;
use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Equipment API and themed page routes
    /// - Custom routes
    pub fn build_router(host: Arc<PluginHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let mut app = Self::health_routes().merge(build_plugin_routes(&host));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http())))
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "equipments"
        }))
    }
}
