//! Configuration loading and management

use crate::core::error::{ConfigError, EquipmentsResult};
use crate::core::store::ExtensionStore;
use crate::equipment::model::{Equipment, EquipmentGroup};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

/// Page size of the themed page when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Title of the themed page when none is configured
pub const DEFAULT_TITLE: &str = "装备";

/// Complete configuration of the plugin
///
/// # Example
/// ```yaml
/// server:
///   address: 0.0.0.0:8090
/// settings:
///   base:
///     pageSize: 12
///     title: My desk
/// templates: ./templates
/// seed:
///   groups:
///     - metadata: { name: peripherals }
///       spec: { displayName: Peripherals, priority: 1 }
///   equipments:
///     - metadata: { name: keyboard }
///       spec:
///         displayName: Mechanical Keyboard
///         url: https://example.com/keyboard
///         groupName: peripherals
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginConfig {
    pub server: ServerConfig,

    pub settings: PluginSettings,

    /// Directory holding template overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<PathBuf>,

    /// Records loaded into the store at startup
    pub seed: SeedData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:8090".to_string(),
        }
    }
}

/// Plugin settings, grouped like the host's setting forms
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    pub base: BaseSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseSettings {
    /// Equipment per page on the themed page
    pub page_size: usize,

    /// Title of the themed page
    pub title: String,
}

impl Default for BaseSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub groups: Vec<EquipmentGroup>,
    pub equipments: Vec<Equipment>,
}

impl PluginConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> EquipmentsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::IoError {
                message: e.to_string(),
            },
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::ParseError {
                file: Some(path.display().to_string()),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> EquipmentsResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

impl SeedData {
    /// Validate every record, then create them in the stores
    ///
    /// Nothing is written when any record fails validation.
    pub async fn apply(
        &self,
        groups: &dyn ExtensionStore<EquipmentGroup>,
        equipments: &dyn ExtensionStore<Equipment>,
    ) -> EquipmentsResult<()> {
        for group in &self.groups {
            group.spec.validate()?;
        }
        for equipment in &self.equipments {
            equipment.spec.validate()?;
        }

        for group in &self.groups {
            groups.create(group.clone()).await?;
        }
        for equipment in &self.equipments {
            equipments.create(equipment.clone()).await?;
        }

        tracing::info!(
            groups = self.groups.len(),
            equipments = self.equipments.len(),
            "seeded equipment catalogue"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryExtensionStore;

    const YAML: &str = r#"
settings:
  base:
    pageSize: 4
seed:
  groups:
    - metadata:
        name: peripherals
      spec:
        displayName: Peripherals
  equipments:
    - metadata:
        name: keyboard
        labels:
          tier: gold
      spec:
        displayName: Mechanical Keyboard
        url: https://example.com/keyboard
        groupName: peripherals
        priority: 1
"#;

    #[test]
    fn test_defaults() {
        let config = PluginConfig::default();
        assert_eq!(config.server.address, "127.0.0.1:8090");
        assert_eq!(config.settings.base.page_size, 10);
        assert_eq!(config.settings.base.title, "装备");
        assert!(config.templates.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = PluginConfig::from_yaml_str(YAML).unwrap();
        assert_eq!(config.settings.base.page_size, 4);
        assert_eq!(config.settings.base.title, "装备");
        assert_eq!(config.seed.groups.len(), 1);
        assert_eq!(config.seed.equipments[0].spec.priority, Some(1));
        assert_eq!(config.seed.equipments[0].metadata.label("tier"), Some("gold"));
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = PluginConfig::from_yaml_str("settings: [").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[tokio::test]
    async fn test_seed_apply() {
        let config = PluginConfig::from_yaml_str(YAML).unwrap();
        let groups = InMemoryExtensionStore::<EquipmentGroup>::new();
        let equipments = InMemoryExtensionStore::<Equipment>::new();

        config.seed.apply(&groups, &equipments).await.unwrap();
        assert_eq!(groups.len(), 1);
        assert!(equipments.fetch("keyboard").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_seed_rejects_invalid_records() {
        let mut config = PluginConfig::from_yaml_str(YAML).unwrap();
        config.seed.equipments[0].spec.group_name = "two words".to_string();

        let groups = InMemoryExtensionStore::<EquipmentGroup>::new();
        let equipments = InMemoryExtensionStore::<Equipment>::new();
        let err = config.seed.apply(&groups, &equipments).await.unwrap_err();

        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(groups.is_empty());
        assert!(equipments.is_empty());
    }
}
