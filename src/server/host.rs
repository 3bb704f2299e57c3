//! Server host holding the plugin state
//!
//! The host owns the stores, the configuration and the template renderer.
//! Handlers never see it directly; each route group gets the slice of state
//! it needs through [`PluginHost::api_state`] and [`PluginHost::theme_state`].

use crate::config::PluginConfig;
use crate::core::error::EquipmentsResult;
use crate::core::store::ExtensionStore;
use crate::equipment::finder::EquipmentFinder;
use crate::equipment::handlers::AppState;
use crate::equipment::model::{Equipment, EquipmentGroup};
use crate::equipment::service::{EquipmentGroupService, EquipmentService};
use crate::theme::{ThemeRenderer, ThemeState};
use std::sync::Arc;

/// Host context containing all plugin state
///
/// # Example
///
/// ```rust,ignore
/// let host = ServerBuilder::new()
///     .with_config(config)
///     .build_host()?;
/// host.seed().await?;
///
/// let app = RestExposure::build_router(Arc::new(host), vec![])?;
/// ```
pub struct PluginHost {
    /// Loaded configuration
    pub config: Arc<PluginConfig>,

    /// Store of equipment groups
    pub groups: Arc<dyn ExtensionStore<EquipmentGroup>>,

    /// Store of equipment
    pub equipments: Arc<dyn ExtensionStore<Equipment>>,

    /// Renderer of the themed pages
    pub renderer: Arc<ThemeRenderer>,
}

impl PluginHost {
    pub fn new(
        config: PluginConfig,
        groups: Arc<dyn ExtensionStore<EquipmentGroup>>,
        equipments: Arc<dyn ExtensionStore<Equipment>>,
    ) -> EquipmentsResult<Self> {
        let renderer = ThemeRenderer::with_overrides(config.templates.as_deref())?;
        Ok(Self {
            config: Arc::new(config),
            groups,
            equipments,
            renderer: Arc::new(renderer),
        })
    }

    /// Load the configured seed records into the stores
    pub async fn seed(&self) -> EquipmentsResult<()> {
        self.config
            .seed
            .apply(self.groups.as_ref(), self.equipments.as_ref())
            .await
    }

    /// State of the equipment API handlers
    pub fn api_state(&self) -> AppState {
        AppState {
            equipment_service: EquipmentService::new(self.equipments.clone()),
            group_service: EquipmentGroupService::new(self.groups.clone(), self.equipments.clone()),
        }
    }

    /// State of the themed page handlers
    pub fn theme_state(&self) -> ThemeState {
        ThemeState {
            finder: EquipmentFinder::new(self.groups.clone(), self.equipments.clone()),
            settings: Arc::new(self.config.settings.base.clone()),
            renderer: self.renderer.clone(),
        }
    }
}
