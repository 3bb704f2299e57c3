//! HTTP handlers for the equipment API
//!
//! Mounted under [`API_PREFIX`], where the host exposes plugin endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};
use axum_extra::extract::{Query, QueryRejection};

use crate::core::error::{EquipmentsError, ValidationError};
use crate::core::query::{ListQuery, ListResult};
use crate::equipment::query::EquipmentQuery;
use crate::equipment::service::{EquipmentGroupService, EquipmentService};
use crate::equipment::vo::{EquipmentGroupVo, EquipmentVo};

/// Prefix of every plugin API route
pub const API_PREFIX: &str = "/apis/api.plugin.halo.run/v1alpha1/plugins/PluginEquipments";

/// State shared by the API handlers
#[derive(Clone)]
pub struct AppState {
    pub equipment_service: EquipmentService,
    pub group_service: EquipmentGroupService,
}

/// List equipment
///
/// GET /equipments?group=&keyword=&sort=&sortOrder=&page=&size=&labelSelector=&fieldSelector=
pub async fn list_equipments(
    State(state): State<AppState>,
    query: Result<Query<EquipmentQuery>, QueryRejection>,
) -> Result<Json<ListResult<EquipmentVo>>, EquipmentsError> {
    let Query(query) = query.map_err(invalid_query)?;
    let page = state.equipment_service.list_equipment(&query).await?;
    Ok(Json(page.map(EquipmentVo::from)))
}

/// List equipment groups with their equipment counts
///
/// GET /equipmentgroups?page=&size=&labelSelector=&fieldSelector=
pub async fn list_equipment_groups(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResult<EquipmentGroupVo>>, EquipmentsError> {
    let Query(query) = query.map_err(invalid_query)?;
    let page = state.group_service.list_equipment_group(&query).await?;
    Ok(Json(page.map(EquipmentGroupVo::from)))
}

/// Delete a group and its member equipment
///
/// DELETE /equipmentgroups/{name}
pub async fn delete_equipment_group(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<EquipmentGroupVo>, EquipmentsError> {
    let deleted = state.group_service.delete_equipment_group(&name).await?;
    Ok(Json(EquipmentGroupVo::from(deleted)))
}

/// Report an undecodable query string in the usual error body
fn invalid_query(rejection: QueryRejection) -> EquipmentsError {
    ValidationError::FieldError {
        field: "query".to_string(),
        message: rejection.to_string(),
    }
    .into()
}

/// Build the API routes, already nested under [`API_PREFIX`]
pub fn build_equipment_routes(state: AppState) -> Router {
    let routes = Router::new()
        .route("/equipments", get(list_equipments))
        .route("/equipmentgroups", get(list_equipment_groups))
        .route("/equipmentgroups/{name}", delete(delete_equipment_group))
        .with_state(state);

    Router::new().nest(API_PREFIX, routes)
}
