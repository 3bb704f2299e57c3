//! # Equipments
//!
//! An equipment catalogue plugin: equipment items organized into groups,
//! exposed through a JSON listing API and a themed HTML page.
//!
//! ## Features
//!
//! - **Listing engine**: filter, sort and paginate in one store call
//! - **Sort keys**: `DISPLAY_NAME` and `CREATE_TIME`, ascending or descending
//! - **Filters**: group, keyword, label and field selectors
//! - **Group aggregation**: live equipment counts per group, computed concurrently
//! - **Cascading delete**: deleting a group removes its equipment
//! - **Themed page**: `/equipments` rendered with tera, paged with prev/next links
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use equipments::prelude::*;
//!
//! let config = PluginConfig::from_yaml_file("equipments.yaml")?;
//! ServerBuilder::new()
//!     .with_config(config)
//!     .serve("127.0.0.1:8090")
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod equipment;
pub mod server;
pub mod storage;
pub mod theme;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Comparator, EquipmentsError, EquipmentsResult, Extension, ExtensionStore,
        GroupVersionKind, ListQuery, ListResult, Metadata, Predicate, Selector,
    };

    // === Equipment ===
    pub use crate::equipment::{
        Equipment, EquipmentFinder, EquipmentGroup, EquipmentGroupService, EquipmentGroupSpec,
        EquipmentGroupStatus, EquipmentGroupVo, EquipmentQuery, EquipmentService,
        EquipmentSorter, EquipmentSpec, EquipmentVo,
    };

    // === Storage ===
    pub use crate::storage::InMemoryExtensionStore;

    // === Config ===
    pub use crate::config::{BaseSettings, PluginConfig, PluginSettings, SeedData, ServerConfig};

    // === Server ===
    pub use crate::server::{PluginHost, RestExposure, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::Router;
}
