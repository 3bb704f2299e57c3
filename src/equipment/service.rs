//! Equipment and group services

use crate::core::compare::Predicate;
use crate::core::error::{EquipmentsError, EquipmentsResult};
use crate::core::extension::Extension;
use crate::core::listing::list_page;
use crate::core::query::{ListQuery, ListResult};
use crate::core::store::ExtensionStore;
use crate::equipment::filter::{equipment_predicate, group_predicate, in_group};
use crate::equipment::model::{Equipment, EquipmentGroup};
use crate::equipment::query::EquipmentQuery;
use crate::equipment::sorter::EquipmentSorter;
use futures::future::try_join_all;
use std::sync::Arc;

/// Filtered, sorted and paged equipment listing
#[derive(Clone)]
pub struct EquipmentService {
    equipments: Arc<dyn ExtensionStore<Equipment>>,
}

impl EquipmentService {
    pub fn new(equipments: Arc<dyn ExtensionStore<Equipment>>) -> Self {
        Self { equipments }
    }

    /// One page of equipment matching `query`
    pub async fn list_equipment(&self, query: &EquipmentQuery) -> EquipmentsResult<ListResult<Equipment>> {
        let predicate = equipment_predicate(query)?;
        let comparator = EquipmentSorter::comparator(query.sort(), query.sort_order());
        list_page(
            self.equipments.as_ref(),
            predicate,
            Some(comparator),
            query.page,
            query.size,
        )
        .await
    }
}

/// Group listing with equipment counts, and cascading group deletion
#[derive(Clone)]
pub struct EquipmentGroupService {
    groups: Arc<dyn ExtensionStore<EquipmentGroup>>,
    equipments: Arc<dyn ExtensionStore<Equipment>>,
}

impl EquipmentGroupService {
    pub fn new(
        groups: Arc<dyn ExtensionStore<EquipmentGroup>>,
        equipments: Arc<dyn ExtensionStore<Equipment>>,
    ) -> Self {
        Self { groups, equipments }
    }

    /// One page of groups in store order, each carrying its equipment count
    pub async fn list_equipment_group(
        &self,
        query: &ListQuery,
    ) -> EquipmentsResult<ListResult<EquipmentGroup>> {
        let predicate = group_predicate(query)?;
        let page = list_page(self.groups.as_ref(), predicate, None, query.page, query.size).await?;
        let ListResult {
            page: number,
            size,
            total,
            items,
            ..
        } = page;

        let items = self.populate_equipment_counts(items).await?;
        Ok(ListResult::new(number, size, total, items))
    }

    /// Attach `status.equipmentCount` to every group
    ///
    /// The counts are fetched concurrently; the first failure fails the
    /// whole batch.
    pub async fn populate_equipment_counts(
        &self,
        groups: Vec<EquipmentGroup>,
    ) -> EquipmentsResult<Vec<EquipmentGroup>> {
        try_join_all(groups.into_iter().map(|mut group| async move {
            let count = self.fetch_equipment_count(group.name()).await?;
            group.status_or_default().equipment_count = Some(count);
            Ok::<_, EquipmentsError>(group)
        }))
        .await
    }

    /// Number of live (not soft-deleted) equipment in a group
    pub async fn fetch_equipment_count(&self, group: &str) -> EquipmentsResult<usize> {
        let member = in_group(group);
        let live: Predicate<Equipment> =
            Arc::new(move |equipment: &Equipment| !equipment.is_deleted() && member(equipment));
        Ok(self.equipments.list(Some(live), None).await?.len())
    }

    /// Delete a group and then every equipment pointing at it
    ///
    /// Not atomic. A member that fails to delete is logged and skipped; the
    /// group deletion is still reported as successful.
    pub async fn delete_equipment_group(&self, name: &str) -> EquipmentsResult<EquipmentGroup> {
        let group = self.groups.get(name).await?;
        let deleted = self.groups.delete(&group).await?;

        let members = self.equipments.list(Some(in_group(name)), None).await?;
        let mut removed = 0usize;
        for member in &members {
            match self.equipments.delete(member).await {
                Ok(_) => removed += 1,
                Err(e) => tracing::warn!(
                    group = name,
                    equipment = member.name(),
                    error = %e,
                    "failed to delete group member"
                ),
            }
        }

        tracing::info!(group = name, members = removed, "deleted equipment group");
        Ok(deleted)
    }
}
