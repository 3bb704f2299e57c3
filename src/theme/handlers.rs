//! HTTP handlers for the themed equipment page

use axum::{
    Router,
    extract::{Path, Query, State},
    http::Uri,
    response::Html,
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;
use tera::Context;

use crate::config::BaseSettings;
use crate::core::error::EquipmentsError;
use crate::core::query::non_blank;
use crate::equipment::finder::EquipmentFinder;
use crate::theme::page_url::{append_group_param, next_page_url, prev_page_url};
use crate::theme::{EQUIPMENTS_TEMPLATE, ThemeRenderer, UrlContextListResult};

/// Template id exposed to the page
const TEMPLATE_ID: &str = "equipments";

/// State shared by the theme handlers
#[derive(Clone)]
pub struct ThemeState {
    pub finder: EquipmentFinder,
    pub settings: Arc<BaseSettings>,
    pub renderer: Arc<ThemeRenderer>,
}

/// Query of the themed page
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub group: Option<String>,
}

/// GET /equipments
pub async fn equipments_page(
    State(state): State<ThemeState>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, EquipmentsError> {
    render_page(&state, uri.path(), 1, non_blank(&query.group)).await
}

/// GET /equipments/page/{page}
///
/// Page 0 renders the first page.
pub async fn equipments_page_n(
    State(state): State<ThemeState>,
    Path(page): Path<usize>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, EquipmentsError> {
    render_page(&state, uri.path(), page.max(1), non_blank(&query.group)).await
}

async fn render_page(
    state: &ThemeState,
    path: &str,
    page: usize,
    group: Option<&str>,
) -> Result<Html<String>, EquipmentsError> {
    let groups = state.finder.group_by().await?;
    let list = state
        .finder
        .list(Some(page), Some(state.settings.page_size), group)
        .await?;

    let equipments = UrlContextListResult {
        next_url: append_group_param(&next_page_url(path, list.total_pages), group),
        prev_url: append_group_param(&prev_page_url(path), group),
        list,
    };

    let mut context = Context::new();
    context.insert("title", &state.settings.title);
    context.insert("groups", &groups);
    context.insert("equipments", &equipments);
    context.insert("template_id", TEMPLATE_ID);

    let html = state.renderer.render(EQUIPMENTS_TEMPLATE, &context)?;
    Ok(Html(html))
}

/// Build the themed page routes
pub fn build_theme_routes(state: ThemeState) -> Router {
    Router::new()
        .route("/equipments", get(equipments_page))
        .route("/equipments/page/{page}", get(equipments_page_n))
        .with_state(state)
}
