//! Equipment and equipment group records

use crate::core::extension::{Extension, GroupVersionKind, Metadata};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// API group both kinds are registered under
pub const GROUP: &str = "core.halo.run";

/// API version both kinds are registered under
pub const VERSION: &str = "v1alpha1";

/// A group name is a single token without whitespace
pub static GROUP_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+$").unwrap());

/// One catalogue item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub metadata: Metadata,
    pub spec: EquipmentSpec,
}

/// User-authored part of an [`Equipment`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSpec {
    #[validate(required(message = "displayName is required"), length(min = 1))]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,

    /// Ordering only; absent sorts after every present value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    /// Name of the owning [`EquipmentGroup`]
    #[validate(regex(path = *GROUP_NAME_PATTERN, message = "groupName must not contain whitespace"))]
    pub group_name: String,
}

impl EquipmentSpec {
    pub fn new(
        display_name: impl Into<String>,
        url: impl Into<String>,
        group_name: impl Into<String>,
    ) -> Self {
        Self {
            display_name: Some(display_name.into()),
            url: url.into(),
            group_name: group_name.into(),
            ..Default::default()
        }
    }
}

impl Equipment {
    pub fn new(metadata: Metadata, spec: EquipmentSpec) -> Self {
        Self { metadata, spec }
    }
}

impl Extension for Equipment {
    fn gvk() -> GroupVersionKind {
        GroupVersionKind {
            group: GROUP,
            version: VERSION,
            kind: "Equipment",
            plural: "equipments",
            singular: "equipment",
        }
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

/// A named bucket of equipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentGroup {
    pub metadata: Metadata,
    pub spec: EquipmentGroupSpec,

    /// Derived on every read, never the source of truth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EquipmentGroupStatus>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentGroupSpec {
    #[validate(length(min = 1, message = "displayName is required"))]
    pub display_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentGroupStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_count: Option<usize>,
}

impl EquipmentGroup {
    pub fn new(metadata: Metadata, spec: EquipmentGroupSpec) -> Self {
        Self {
            metadata,
            spec,
            status: None,
        }
    }

    /// The status, created empty on first access
    pub fn status_or_default(&mut self) -> &mut EquipmentGroupStatus {
        self.status.get_or_insert_with(EquipmentGroupStatus::default)
    }
}

impl Extension for EquipmentGroup {
    fn gvk() -> GroupVersionKind {
        GroupVersionKind {
            group: GROUP,
            version: VERSION,
            kind: "EquipmentGroup",
            plural: "equipmentgroups",
            singular: "equipmentgroup",
        }
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}
