//! Server module for building the plugin HTTP server
//!
//! This module provides a `ServerBuilder` that registers:
//! - the equipment API under the plugin prefix
//! - the themed `/equipments` page
//! - health check routes

pub mod builder;
pub mod exposure;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use host::PluginHost;
