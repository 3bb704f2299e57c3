//! Query parameters of the equipment listing

use crate::core::query::{ListQuery, non_blank};
use crate::equipment::sorter::EquipmentSorter;
use serde::Deserialize;

/// Parameters of `GET .../equipments`
///
/// # Example
/// ```text
/// GET /equipments?group=peripherals&keyword=board&sort=DISPLAY_NAME&sortOrder=false
/// GET /equipments?labelSelector=tier=gold&labelSelector=!hidden
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentQuery {
    pub page: Option<usize>,
    pub size: Option<usize>,
    #[serde(default)]
    pub label_selector: Vec<String>,
    #[serde(default)]
    pub field_selector: Vec<String>,

    /// Exact group name
    pub group: Option<String>,

    /// Case-insensitive display name fragment
    pub keyword: Option<String>,

    /// `DISPLAY_NAME` or `CREATE_TIME`
    pub sort: Option<String>,

    /// `true` for ascending, anything else for descending
    pub sort_order: Option<String>,
}

impl EquipmentQuery {
    pub fn group(&self) -> Option<&str> {
        non_blank(&self.group)
    }

    pub fn keyword(&self) -> Option<&str> {
        non_blank(&self.keyword)
    }

    pub fn sort(&self) -> Option<EquipmentSorter> {
        non_blank(&self.sort).and_then(EquipmentSorter::parse)
    }

    /// Sort direction; `None` when the parameter is absent or blank
    pub fn sort_order(&self) -> Option<bool> {
        non_blank(&self.sort_order).map(|order| order.eq_ignore_ascii_case("true"))
    }

    /// The generic part shared with every listing
    pub fn list_query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            size: self.size,
            label_selector: self.label_selector.clone(),
            field_selector: self.field_selector.clone(),
        }
    }
}
