//! Response projections of equipment and groups

use crate::core::extension::Metadata;
use crate::equipment::model::{
    Equipment, EquipmentGroup, EquipmentGroupSpec, EquipmentGroupStatus, EquipmentSpec,
};
use serde::{Deserialize, Serialize};

/// Equipment as returned to API clients and templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentVo {
    pub metadata: Metadata,
    pub spec: EquipmentSpec,
}

impl From<&Equipment> for EquipmentVo {
    fn from(equipment: &Equipment) -> Self {
        Self {
            metadata: equipment.metadata.clone(),
            spec: equipment.spec.clone(),
        }
    }
}

impl From<Equipment> for EquipmentVo {
    fn from(equipment: Equipment) -> Self {
        Self {
            metadata: equipment.metadata,
            spec: equipment.spec,
        }
    }
}

/// Group with its derived status and, for navigation, its members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentGroupVo {
    pub metadata: Metadata,
    pub spec: EquipmentGroupSpec,
    pub status: EquipmentGroupStatus,

    /// Empty unless filled by the group-by listing
    #[serde(default)]
    pub equipments: Vec<EquipmentVo>,
}

impl From<&EquipmentGroup> for EquipmentGroupVo {
    fn from(group: &EquipmentGroup) -> Self {
        Self {
            metadata: group.metadata.clone(),
            spec: group.spec.clone(),
            status: group.status.clone().unwrap_or_default(),
            equipments: Vec::new(),
        }
    }
}

impl From<EquipmentGroup> for EquipmentGroupVo {
    fn from(mut group: EquipmentGroup) -> Self {
        let status = std::mem::take(group.status_or_default());
        Self {
            metadata: group.metadata,
            spec: group.spec,
            status,
            equipments: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_vo_keeps_metadata_and_spec() {
        let equipment = Equipment::new(
            Metadata::named("keyboard").with_label("tier", "gold"),
            EquipmentSpec::new("Keyboard", "https://example.com", "peripherals"),
        );
        let vo = EquipmentVo::from(&equipment);
        assert_eq!(vo.metadata, equipment.metadata);
        assert_eq!(vo.spec, equipment.spec);
    }

    #[test]
    fn test_group_vo_defaults() {
        let group = EquipmentGroup::new(
            Metadata::named("peripherals"),
            EquipmentGroupSpec {
                display_name: "Peripherals".to_string(),
                priority: Some(1),
            },
        );
        let vo = EquipmentGroupVo::from(group.clone());
        assert_eq!(vo.metadata, group.metadata);
        assert_eq!(vo.spec, group.spec);
        assert_eq!(vo.status, EquipmentGroupStatus::default());
        assert!(vo.equipments.is_empty());
    }

    #[test]
    fn test_group_vo_keeps_status() {
        let mut group = EquipmentGroup::new(
            Metadata::named("desk"),
            EquipmentGroupSpec {
                display_name: "Desk".to_string(),
                priority: None,
            },
        );
        group.status_or_default().equipment_count = Some(4);

        let vo = EquipmentGroupVo::from(&group);
        assert_eq!(vo.status.equipment_count, Some(4));
    }
}
