//! Standalone equipment catalogue server
//!
//! Usage: `equipments [config.yaml]`. The configuration path may also come
//! from `EQUIPMENTS_CONFIG`; without one the defaults are used and the
//! catalogue starts empty.

use anyhow::{Context, Result};
use equipments::config::PluginConfig;
use equipments::server::ServerBuilder;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG_ENV: &str = "EQUIPMENTS_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,equipments=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok());

    let config = match config_path {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            PluginConfig::from_yaml_file(&path)
                .with_context(|| format!("failed to load configuration from {}", path))?
        }
        None => {
            tracing::info!("No configuration given, using defaults");
            PluginConfig::default()
        }
    };

    let address = config.server.address.clone();
    tracing::info!(
        page_size = config.settings.base.page_size,
        title = %config.settings.base.title,
        "Starting equipments"
    );

    ServerBuilder::new()
        .with_config(config)
        .serve(&address)
        .await
}
