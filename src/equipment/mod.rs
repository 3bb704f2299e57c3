//! Equipment catalogue: records, orderings, filters, services and handlers

pub mod filter;
pub mod finder;
pub mod handlers;
pub mod model;
pub mod query;
pub mod service;
pub mod sorter;
pub mod vo;

pub use finder::EquipmentFinder;
pub use handlers::{API_PREFIX, AppState, build_equipment_routes};
pub use model::{
    Equipment, EquipmentGroup, EquipmentGroupSpec, EquipmentGroupStatus, EquipmentSpec,
};
pub use query::EquipmentQuery;
pub use service::{EquipmentGroupService, EquipmentService};
pub use sorter::EquipmentSorter;
pub use vo::{EquipmentGroupVo, EquipmentVo};
