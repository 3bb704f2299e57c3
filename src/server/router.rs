//! Router builder utilities for the plugin routes

use crate::equipment::handlers::build_equipment_routes;
use crate::server::host::PluginHost;
use crate::theme::build_theme_routes;
use axum::Router;

/// Build every plugin route
///
/// - GET    {API_PREFIX}/equipments - list equipment
/// - GET    {API_PREFIX}/equipmentgroups - list groups with counts
/// - DELETE {API_PREFIX}/equipmentgroups/{name} - cascading group delete
/// - GET    /equipments, /equipments/page/{page} - themed page
pub fn build_plugin_routes(host: &PluginHost) -> Router {
    build_equipment_routes(host.api_state()).merge(build_theme_routes(host.theme_state()))
}
