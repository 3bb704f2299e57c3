//! Read-only equipment queries used by the themed pages

use crate::core::compare::{Predicate, always, and};
use crate::core::error::EquipmentsResult;
use crate::core::extension::Extension;
use crate::core::listing::list_page;
use crate::core::query::ListResult;
use crate::core::store::ExtensionStore;
use crate::equipment::filter::in_group;
use crate::equipment::model::{Equipment, EquipmentGroup};
use crate::equipment::sorter::{default_equipment_comparator, default_group_comparator};
use crate::equipment::vo::{EquipmentGroupVo, EquipmentVo};
use std::sync::Arc;

/// Theme-facing equipment reads
///
/// Every listing uses the default equipment order (priority, newest first,
/// name) and returns view objects ready for templates.
#[derive(Clone)]
pub struct EquipmentFinder {
    groups: Arc<dyn ExtensionStore<EquipmentGroup>>,
    equipments: Arc<dyn ExtensionStore<Equipment>>,
}

impl EquipmentFinder {
    pub fn new(
        groups: Arc<dyn ExtensionStore<EquipmentGroup>>,
        equipments: Arc<dyn ExtensionStore<Equipment>>,
    ) -> Self {
        Self { groups, equipments }
    }

    /// Every equipment
    pub async fn list_all(&self) -> EquipmentsResult<Vec<EquipmentVo>> {
        let all = self
            .equipments
            .list(None, Some(default_equipment_comparator()))
            .await?;
        Ok(all.into_iter().map(EquipmentVo::from).collect())
    }

    /// One page of equipment, optionally restricted to a group
    pub async fn list(
        &self,
        page: Option<usize>,
        size: Option<usize>,
        group: Option<&str>,
    ) -> EquipmentsResult<ListResult<EquipmentVo>> {
        let mut predicate: Predicate<Equipment> = always();
        if let Some(group) = group.filter(|g| !g.is_empty()) {
            predicate = and(predicate, in_group(group));
        }

        let page = list_page(
            self.equipments.as_ref(),
            predicate,
            Some(default_equipment_comparator()),
            page,
            size,
        )
        .await?;
        Ok(page.map(EquipmentVo::from))
    }

    /// Every member of a group
    pub async fn list_by(&self, group: &str) -> EquipmentsResult<Vec<EquipmentVo>> {
        let members = self
            .equipments
            .list(Some(in_group(group)), Some(default_equipment_comparator()))
            .await?;
        Ok(members.into_iter().map(EquipmentVo::from).collect())
    }

    /// Every group in default group order with its live members
    ///
    /// `equipmentCount` is the length of the member list.
    pub async fn group_by(&self) -> EquipmentsResult<Vec<EquipmentGroupVo>> {
        let groups = self
            .groups
            .list(None, Some(default_group_comparator()))
            .await?;

        let mut result = Vec::with_capacity(groups.len());
        for group in groups {
            let members: Vec<EquipmentVo> = self
                .list_by(group.name())
                .await?
                .into_iter()
                .filter(|member| member.metadata.deletion_timestamp.is_none())
                .collect();

            let mut vo = EquipmentGroupVo::from(group);
            vo.status.equipment_count = Some(members.len());
            vo.equipments = members;
            result.push(vo);
        }
        Ok(result)
    }
}
